use dioxus::prelude::*;
use shared_types::config::role_label;
use shared_types::User;

/// Avatar, name and role of the signed-in user.
#[component]
pub fn UserProfile(user: User) -> Element {
    let role = role_label(&user.role);
    let initials = user.initials();

    rsx! {
        div { class: "sidebar-profile",
            if let Some(image) = user.profile_image.clone() {
                img { class: "sidebar-avatar", src: "{image}", alt: "{user.username}" }
            } else {
                span { class: "sidebar-avatar sidebar-avatar-fallback", "{initials}" }
            }
            div { class: "sidebar-profile-details",
                span { class: "sidebar-profile-name", "{user.username}" }
                span { class: "sidebar-profile-role", "{role}" }
            }
        }
    }
}
