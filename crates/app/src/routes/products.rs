use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::config::format_currency;
use shared_types::{AppError, Product, ProductQuery, ProductRequest};
use shared_ui::{
    Badge, BadgeVariant, Button, Card, CardContent, CardFooter, CardHeader, CardTitle, Input,
    SelectInput, Skeleton,
};

use super::form_view::{options, parse_number};
use crate::api_context::{use_api, use_store};
use crate::auth::use_auth;

const PRODUCT_TYPES: &[(&str, &str)] = &[("goods", "Goods"), ("service", "Service")];

/// Category filter options; the empty value means all categories.
fn category_options(categories: &[shared_types::Category]) -> Vec<(String, String)> {
    std::iter::once((String::new(), "All categories".to_string()))
        .chain(
            categories
                .iter()
                .filter(|c| c.is_active)
                .map(|c| (c.id.to_string(), c.name.clone())),
        )
        .collect()
}

/// Product master entry as typed; prices stay text until submit.
#[derive(Debug, Clone, PartialEq)]
struct ProductDraft {
    name: String,
    product_type: String,
    hsn_code: String,
    sales_price: String,
    purchase_price: String,
    sale_tax_percent: String,
    purchase_tax_percent: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            product_type: "goods".to_string(),
            hsn_code: String::new(),
            sales_price: String::new(),
            purchase_price: String::new(),
            sale_tax_percent: String::new(),
            purchase_tax_percent: String::new(),
        }
    }
}

impl ProductDraft {
    fn to_request(&self) -> Result<ProductRequest, AppError> {
        Ok(ProductRequest {
            name: self.name.trim().to_string(),
            product_type: self.product_type.clone(),
            sales_price: parse_number("sales_price", &self.sales_price)?,
            purchase_price: parse_number("purchase_price", &self.purchase_price)?,
            sale_tax_percent: parse_number("sale_tax_percent", &self.sale_tax_percent)?,
            purchase_tax_percent: parse_number("purchase_tax_percent", &self.purchase_tax_percent)?,
            hsn_code: self.hsn_code.trim().to_string(),
        })
    }
}

fn build_query(category: &str, search: &str, featured: bool) -> ProductQuery {
    let mut query = ProductQuery::default().search(search);
    if let Ok(id) = category.parse::<i64>() {
        query = query.category(id);
    }
    if featured {
        query = query.featured(true);
    }
    query
}

/// Catalog with category, search and featured filters.
#[component]
pub fn Products() -> Element {
    let actions = use_api();
    let store = use_store();
    let mut category = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut featured = use_signal(|| false);

    let reload = {
        let actions = actions.clone();
        move || {
            let actions = actions.clone();
            let query = build_query(&category(), &search(), featured());
            spawn(async move {
                actions.fetch_products(&query).await;
            });
        }
    };

    let (options, loading, products, error) = {
        let snapshot = store.read();
        (
            category_options(&snapshot.categories),
            snapshot.loading.products,
            snapshot.products.clone(),
            snapshot.error.clone(),
        )
    };

    let on_category = {
        let reload = reload.clone();
        move |value: String| {
            category.set(value);
            reload();
        }
    };
    let on_search = {
        let reload = reload.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            reload();
        }
    };
    let on_featured = {
        let reload = reload.clone();
        move |evt: FormEvent| {
            featured.set(evt.checked());
            reload();
        }
    };
    let dismiss = {
        let actions = actions.clone();
        move |_| actions.clear_error()
    };

    let on_created = {
        let reload = reload.clone();
        move |_| reload()
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./products.css") }
        document::Link { rel: "stylesheet", href: asset!("./ledger.css") }

        ProductForm { on_created }

        if let Some(message) = error {
            div { class: "page-error", role: "alert",
                span { "{message}" }
                button { class: "page-error-dismiss", r#type: "button", onclick: dismiss, "Dismiss" }
            }
        }

        form { class: "product-filters", onsubmit: on_search,
            SelectInput {
                name: "category",
                value: category(),
                options,
                on_change: on_category,
            }
            Input {
                name: "search",
                placeholder: "Search products",
                value: search(),
                on_input: move |e: FormEvent| search.set(e.value()),
            }
            label { class: "product-featured",
                input {
                    r#type: "checkbox",
                    checked: featured(),
                    onchange: on_featured,
                }
                "Featured only"
            }
            Button { button_type: "submit", "Search" }
        }

        div { class: "product-grid",
            if loading && products.is_empty() {
                for idx in 0..6 {
                    Skeleton { key: "{idx}", class: "product-card-skeleton" }
                }
            } else if products.is_empty() {
                p { class: "page-empty", "No products match these filters." }
            }
            for product in products.iter().cloned() {
                ProductCard { key: "{product.id}", product }
            }
        }
    }
}

/// New product master record with sales and purchase pricing.
#[component]
fn ProductForm(on_created: EventHandler<()>) -> Element {
    let api = use_auth().api;
    let mut draft = use_signal(ProductDraft::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let parsed = draft.read().to_request();
            let result = match parsed {
                Ok(request) => {
                    loading.set(true);
                    let result = api.create_product(&request).await;
                    loading.set(false);
                    result
                }
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    draft.set(ProductDraft::default());
                    on_created.call(());
                }
                Err(e) => {
                    field_errors.set(e.field_errors.clone());
                    if e.field_errors.is_empty() {
                        error_msg.set(Some(e.friendly_message()));
                    }
                }
            }
        }
    };

    let price_input = move |name: &'static str, label: &'static str, value: String| {
        rsx! {
            Input {
                name: name.to_string(),
                label: label.to_string(),
                input_type: "number",
                value,
                error: field_errors().get(name).cloned(),
                on_input: move |e: FormEvent| {
                    let mut draft = draft.write();
                    match name {
                        "sales_price" => draft.sales_price = e.value(),
                        "purchase_price" => draft.purchase_price = e.value(),
                        "sale_tax_percent" => draft.sale_tax_percent = e.value(),
                        _ => draft.purchase_tax_percent = e.value(),
                    }
                },
            }
        }
    };
    let current = draft();

    rsx! {
        if let Some(err) = error_msg() {
            div { class: "page-error", role: "alert", "{err}" }
        }
        form { class: "ledger-form", onsubmit: handle_submit,
            Input {
                name: "name",
                label: "Product name",
                value: current.name.clone(),
                required: true,
                error: field_errors().get("name").cloned(),
                on_input: move |e: FormEvent| draft.write().name = e.value(),
            }
            SelectInput {
                name: "type",
                label: "Type",
                value: current.product_type.clone(),
                options: options(PRODUCT_TYPES),
                on_change: move |value: String| draft.write().product_type = value,
            }
            Input {
                name: "hsn_code",
                label: "HSN code",
                value: current.hsn_code.clone(),
                on_input: move |e: FormEvent| draft.write().hsn_code = e.value(),
            }
            {price_input("sales_price", "Sales price", current.sales_price.clone())}
            {price_input("purchase_price", "Purchase price", current.purchase_price.clone())}
            {price_input("sale_tax_percent", "Sales tax %", current.sale_tax_percent.clone())}
            {price_input("purchase_tax_percent", "Purchase tax %", current.purchase_tax_percent.clone())}
            Button { button_type: "submit", loading: loading(), "Add product" }
        }
    }
}

#[component]
fn ProductCard(product: Product) -> Element {
    let actions = use_api();
    let mut adding = use_signal(|| false);
    let product_id = product.id;
    let in_stock = product.in_stock();

    let add = move |_| {
        let actions = actions.clone();
        spawn(async move {
            adding.set(true);
            actions.add_to_cart(product_id, 1).await;
            adding.set(false);
        });
    };

    rsx! {
        Card { class: "product-card",
            if let Some(image) = product.image.clone() {
                img { class: "product-image", src: "{image}", alt: "{product.name}" }
            }
            CardHeader {
                CardTitle { "{product.name}" }
                if let Some(category) = product.category_name.clone() {
                    span { class: "product-category", "{category}" }
                }
            }
            CardContent {
                p { class: "product-price", {format_currency(product.price)} }
                if product.is_featured {
                    Badge { variant: BadgeVariant::Secondary, "Featured" }
                }
                if in_stock {
                    span { class: "product-stock", "{product.stock} in stock" }
                } else {
                    Badge { variant: BadgeVariant::Destructive, "Out of stock" }
                }
            }
            CardFooter {
                Button {
                    disabled: !in_stock,
                    loading: adding(),
                    onclick: add,
                    "Add to cart"
                }
            }
        }
    }
}
