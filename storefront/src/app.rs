//! Application components.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

use shopnow_commerce::prelude::*;
use shopnow_notify::{NotificationCapability, NotificationPrompt, PromptOutcome};

use crate::data::demo_catalog;
use crate::notify::BrowserNotifications;
use crate::toast::{ToastKind, ToastQueue};

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = StoredValue::new(demo_catalog());
    let toasts = RwSignal::new(ToastQueue::default());
    let cart = RwSignal::new_local(CartStore::new());
    let search = RwSignal::new(String::new());
    let sheet_open = RwSignal::new(false);
    let prompt = RwSignal::new(NotificationPrompt::for_state(BrowserNotifications.state()));

    // The renderer's change subscription: every applied cart mutation is
    // acknowledged as a toast.
    cart.update(|store| {
        store.subscribe(move |event| toasts.update(|queue| queue.push_cart_event(event)));
    });

    view! {
        <Title text="ShopNow"/>
        <Meta name="description" content="ShopNow - premium e-commerce demo storefront"/>

        <Header cart=cart sheet_open=sheet_open/>
        <Hero/>
        <main class="container">
            <SearchBar search=search/>
            <ProductGrid catalog=catalog search=search cart=cart/>
            <FeatureHighlights/>
        </main>
        <Footer/>
        <CartSheet cart=cart open=sheet_open/>
        <NotificationPromptCard prompt=prompt toasts=toasts/>
        <ToastStack toasts=toasts/>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header(
    cart: RwSignal<CartStore, LocalStorage>,
    sheet_open: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <header class="site-header">
            <h1>"ShopNow"</h1>
            <button
                class="cart-trigger"
                on:click=move |_| sheet_open.set(true)
                aria-label="Open shopping cart"
            >
                "\u{1f6d2}"
                {move || {
                    let count = cart.with(|c| c.item_count());
                    if count > 0 {
                        view! { <span class="cart-badge">{count.to_string()}</span> }.into_any()
                    } else {
                        view! { <span class="cart-badge hidden"></span> }.into_any()
                    }
                }}
            </button>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-copy">
                <h2>"Premium Products, Anytime"</h2>
                <p>"Shop the collection. Get notified instantly."</p>
                <a href="#products" class="btn">"Explore Collection"</a>
            </div>
        </section>
    }
}

#[component]
fn FeatureHighlights() -> impl IntoView {
    view! {
        <section class="features">
            <h2>"Why Shop With Us?"</h2>
            <div class="feature-grid">
                <div>
                    <h3>"\u{1f4f1} Install & Go"</h3>
                    <p>"Add to your home screen for an app-like experience"</p>
                </div>
                <div>
                    <h3>"\u{1f514} Stay Updated"</h3>
                    <p>"Get instant notifications on new arrivals and offers"</p>
                </div>
                <div>
                    <h3>"\u{1f6cd} Effortless Cart"</h3>
                    <p>"Your selections follow you through the whole session"</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"\u{00a9} 2025 ShopNow. Premium e-commerce demo."</p>
        </footer>
    }
}

// ============================================================================
// Catalog Components
// ============================================================================

#[component]
fn SearchBar(search: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Search products..."
                aria-label="Search products"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn ProductGrid(
    catalog: StoredValue<Catalog>,
    search: RwSignal<String>,
    cart: RwSignal<CartStore, LocalStorage>,
) -> impl IntoView {
    view! {
        <section id="products">
            <h2>"Featured Products"</h2>
            {move || {
                let query = search.get();
                let matched =
                    catalog.with_value(|c| c.search(&query).cloned().collect::<Vec<_>>());
                if matched.is_empty() {
                    view! {
                        <p class="empty-results">
                            "No products found matching \"" {query} "\""
                        </p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="products">
                            {matched
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product cart=cart/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn ProductCard(product: Product, cart: RwSignal<CartStore, LocalStorage>) -> impl IntoView {
    let favorite = RwSignal::new(false);
    let name = product.name.clone();
    let image = product.image.clone();
    let price = product.price.display();
    let add_label = format!("Add {} to cart", product.name);
    let on_add = move |_| cart.update(|c| {
        c.add(&product);
    });

    view! {
        <div class="product-card">
            <div class="product-media">
                <img src=image alt=name.clone() loading="lazy"/>
                <button
                    class="favorite"
                    class:active=move || favorite.get()
                    on:click=move |_| favorite.update(|f| *f = !*f)
                    aria-label="Toggle favorite"
                >
                    "\u{2665}"
                </button>
            </div>
            <div class="product-info">
                <h3>{name}</h3>
                <p class="price">{price}</p>
                <button class="btn" on:click=on_add aria-label=add_label>
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}

// ============================================================================
// Cart Components
// ============================================================================

#[component]
fn CartSheet(cart: RwSignal<CartStore, LocalStorage>, open: RwSignal<bool>) -> impl IntoView {
    view! {
        <div
            class="cart-backdrop"
            class:open=move || open.get()
            on:click=move |_| open.set(false)
        ></div>
        <aside class="cart-sheet" class:open=move || open.get()>
            <div class="cart-sheet-header">
                <h2>"Shopping Cart"</h2>
                <button
                    class="close"
                    on:click=move |_| open.set(false)
                    aria-label="Close cart"
                >
                    "\u{00d7}"
                </button>
            </div>
            <div class="cart-sheet-body">
                {move || {
                    let lines = cart.with(|c| c.lines().to_vec());
                    if lines.is_empty() {
                        view! {
                            <div class="cart-empty">
                                <p>"Your cart is empty"</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="cart-lines">
                                {lines
                                    .into_iter()
                                    .map(|line| view! { <CartLineRow line=line cart=cart/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
            {move || {
                let summary = cart.with(|c| c.summary());
                if summary.item_count == 0 {
                    view! { <div class="cart-footer"></div> }.into_any()
                } else {
                    view! {
                        <div class="cart-footer">
                            <div class="cart-total">
                                <span>"Total"</span>
                                <span class="price">{summary.total.display()}</span>
                            </div>
                            <button class="btn checkout">"Checkout"</button>
                        </div>
                    }
                    .into_any()
                }
            }}
        </aside>
    }
}

#[component]
fn CartLineRow(line: CartItem, cart: RwSignal<CartStore, LocalStorage>) -> impl IntoView {
    let id = line.id;
    let quantity = line.quantity;
    let on_decrement = move |_| cart.update(|c| {
        c.set_quantity(id, quantity - 1);
    });
    let on_increment = move |_| cart.update(|c| {
        c.set_quantity(id, quantity + 1);
    });
    let on_remove = move |_| cart.update(|c| {
        let _ = c.remove(id);
    });

    view! {
        <div class="cart-line">
            <img src=line.image.clone() alt=line.name.clone()/>
            <div class="cart-line-info">
                <h4>{line.name.clone()}</h4>
                <p class="price">{line.price.display()}</p>
                <div class="cart-line-controls">
                    <button on:click=on_decrement aria-label="Decrease quantity">
                        "\u{2212}"
                    </button>
                    <span class="quantity">{quantity.to_string()}</span>
                    <button on:click=on_increment aria-label="Increase quantity">"+"</button>
                    <button class="remove" on:click=on_remove aria-label="Remove item">
                        "Remove"
                    </button>
                </div>
            </div>
        </div>
    }
}

// ============================================================================
// Notification Components
// ============================================================================

#[component]
fn NotificationPromptCard(
    prompt: RwSignal<NotificationPrompt>,
    toasts: RwSignal<ToastQueue>,
) -> impl IntoView {
    let on_enable = move |_| {
        leptos::task::spawn_local(async move {
            let result = BrowserNotifications.request().await;
            let outcome = prompt
                .try_update(|p| p.resolve(result))
                .unwrap_or(PromptOutcome::Failed);
            toasts.update(|queue| queue.push_prompt_outcome(outcome));
        });
    };
    let on_dismiss = move |_| prompt.update(|p| p.dismiss());

    view! {
        {move || {
            if prompt.with(|p| p.is_visible()) {
                view! {
                    <div class="notification-prompt">
                        <div class="notification-icon">"\u{1f514}"</div>
                        <div class="notification-copy">
                            <h3>"Enable Notifications"</h3>
                            <p>"Get notified about new products, sales, and special offers"</p>
                            <div class="notification-actions">
                                <button class="btn" on:click=on_enable>"Enable"</button>
                                <button class="btn ghost" on:click=on_dismiss>"Not now"</button>
                            </div>
                        </div>
                    </div>
                }
                .into_any()
            } else {
                view! { <div class="notification-prompt hidden"></div> }.into_any()
            }
        }}
    }
}

// ============================================================================
// Toast Components
// ============================================================================

#[component]
fn ToastStack(toasts: RwSignal<ToastQueue>) -> impl IntoView {
    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .with(|queue| queue.toasts().to_vec())
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let kind_class = match toast.kind {
                            ToastKind::Success => "toast success",
                            ToastKind::Error => "toast error",
                        };
                        view! {
                            <div
                                class=kind_class
                                on:click=move |_| toasts.update(|queue| queue.dismiss(id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
