use client::MenuIcon;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdClipboardList, LdCreditCard, LdLayoutDashboard, LdPackage, LdShoppingCart, LdUserCheck,
    LdUsers,
};
use dioxus_free_icons::Icon;

#[component]
pub fn MenuIconView(icon: MenuIcon, #[props(default = 18)] size: u32) -> Element {
    match icon {
        MenuIcon::Dashboard => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: size, height: size }
        },
        MenuIcon::Purchases => rsx! {
            Icon::<LdShoppingCart> { icon: LdShoppingCart, width: size, height: size }
        },
        MenuIcon::Sales => rsx! {
            Icon::<LdClipboardList> { icon: LdClipboardList, width: size, height: size }
        },
        MenuIcon::Payments => rsx! {
            Icon::<LdCreditCard> { icon: LdCreditCard, width: size, height: size }
        },
        MenuIcon::Contacts => rsx! {
            Icon::<LdUserCheck> { icon: LdUserCheck, width: size, height: size }
        },
        MenuIcon::Products => rsx! {
            Icon::<LdPackage> { icon: LdPackage, width: size, height: size }
        },
        MenuIcon::Users => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: size, height: size }
        },
    }
}
