//! ShopNow demo storefront entry point.

mod app;
mod data;
mod notify;
mod toast;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        leptos::mount::mount_to_body(app::App);
    }
}
