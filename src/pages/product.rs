use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::carousel::{Carousel, SwipeOutcome, SwipeTracker};
use crate::catalog::{self, format_brl, KIT_OPTIONS};
use crate::cep::{self, Address, CepError, LookupSequence};
use crate::checkout;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::review_section::ReviewSection;
use crate::components::sticky_bar::StickyBar;
use crate::config;
use crate::sticky;
use crate::utils::{scroll, viacep};

const PAGE_CSS: &str = r#"
    .page-main {
        max-width: 80rem;
        margin: 0 auto;
        padding: 1rem;
    }
    .card {
        background: #fff;
        border-radius: 0.5rem;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        padding: 1.5rem;
        margin-bottom: 2rem;
    }
    .product-layout {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    @media (min-width: 1024px) {
        .product-layout {
            display: grid;
            grid-template-columns: auto 1fr 1fr;
        }
        .thumb-rail { order: 1; flex-direction: column; }
        .gallery { order: 2; }
        .product-details { order: 3; }
    }
    .thumb-rail {
        display: flex;
        gap: 0.5rem;
        overflow-x: auto;
    }
    .thumb-rail button {
        width: 4.5rem;
        height: 4.5rem;
        border-radius: 0.5rem;
        border: 2px solid #e5e7eb;
        background: #fff;
        padding: 0.25rem;
        flex-shrink: 0;
    }
    .thumb-rail button.active { border-color: #a855f7; box-shadow: 0 2px 6px rgba(0,0,0,0.12); }
    .thumb-rail img { width: 100%; height: 100%; object-fit: contain; }
    .gallery { position: relative; }
    .gallery-frame {
        position: relative;
        aspect-ratio: 1 / 1;
        background: #fff;
        border-radius: 0.5rem;
        touch-action: pan-y;
        user-select: none;
        overflow: hidden;
    }
    .gallery-frame > img {
        width: 100%;
        height: 100%;
        object-fit: contain;
        padding: 1.5rem;
    }
    .gallery-arrow {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        background: rgba(255, 255, 255, 0.9);
        border: none;
        border-radius: 9999px;
        padding: 0.6rem 0.8rem;
        box-shadow: 0 4px 10px rgba(0, 0, 0, 0.15);
        color: #374151;
        z-index: 10;
    }
    .gallery-arrow.left { left: 0.5rem; }
    .gallery-arrow.right { right: 0.5rem; }
    .gallery-dots {
        position: absolute;
        bottom: 1rem;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        gap: 0.5rem;
    }
    .gallery-dots button {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        border: none;
        background: #d1d5db;
        padding: 0;
    }
    .gallery-dots button.active { background: #5DAFBD; width: 1.5rem; }
    .product-details > * + * { margin-top: 1.25rem; }
    .verified-row {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 0.85rem;
        font-weight: 500;
    }
    .verified-row i { color: #5DAFBD; }
    .sold-row { font-size: 0.85rem; color: #6b7280; }
    .product-title {
        font-size: 1.6rem;
        font-weight: 600;
        color: #374151;
        line-height: 1.3;
    }
    .item-code { font-size: 0.85rem; color: #6b7280; }
    .item-code a { color: #3b82f6; }
    .kit-label {
        font-size: 0.85rem;
        font-weight: 500;
        color: #374151;
        margin-bottom: 0.75rem;
    }
    .kit-row { display: flex; gap: 0.75rem; }
    .kit-row button {
        width: 5rem;
        height: 5rem;
        border-radius: 0.5rem;
        border: 2px solid #e5e7eb;
        background: #fff;
        padding: 0.25rem;
    }
    .kit-row button.active { border-color: #a855f7; box-shadow: 0 4px 10px rgba(0,0,0,0.15); }
    .kit-row img { width: 100%; height: 100%; object-fit: contain; }
    .price-block > * + * { margin-top: 0.4rem; }
    .price-original {
        font-size: 0.9rem;
        color: #9ca3af;
        text-decoration: line-through;
    }
    .price-label { font-size: 0.85rem; color: #6b7280; margin-right: 0.5rem; }
    .price-current {
        font-size: 2.6rem;
        font-weight: 700;
        color: #22c55e;
    }
    .price-discount {
        font-size: 0.9rem;
        font-weight: 600;
        color: #374151;
        margin-left: 0.5rem;
    }
    .installment-line { font-size: 0.85rem; color: #4b5563; }
    .discount-badge {
        display: inline-block;
        background: #22c55e;
        color: #fff;
        font-size: 0.8rem;
        border-radius: 0.25rem;
        padding: 0.2rem 0.6rem;
    }
    .qty-row {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        font-size: 0.85rem;
        color: #374151;
    }
    .qty-stepper {
        display: flex;
        align-items: center;
        border: 1px solid #d1d5db;
        border-radius: 0.5rem;
        overflow: hidden;
    }
    .qty-stepper button {
        padding: 0.6rem;
        background: none;
        border: none;
    }
    .qty-stepper button:hover { background: #f3f4f6; }
    .qty-stepper button:disabled { opacity: 0.4; cursor: default; }
    .qty-stepper input {
        width: 4rem;
        text-align: center;
        border: none;
        border-left: 1px solid #d1d5db;
        border-right: 1px solid #d1d5db;
        padding: 0.6rem 0;
        font-size: 0.9rem;
        -moz-appearance: textfield;
    }
    .qty-stepper input:focus { outline: none; background: #f9fafb; }
    .shipping-box {
        background: #f9fafb;
        border-radius: 0.5rem;
        padding: 1rem;
    }
    .shipping-box > * + * { margin-top: 0.75rem; }
    .shipping-box label {
        display: block;
        font-size: 0.85rem;
        font-weight: 500;
        color: #374151;
        margin-bottom: 0.5rem;
    }
    .cep-row { display: flex; gap: 0.5rem; }
    .cep-row input {
        flex: 1;
        border: 1px solid #d1d5db;
        border-radius: 0.5rem;
        padding: 0.5rem 0.75rem;
        font-size: 0.9rem;
    }
    .cep-row input:focus {
        outline: none;
        border-color: transparent;
        box-shadow: 0 0 0 2px #5DAFBD;
    }
    .cep-search {
        background: #5DAFBD;
        color: #fff;
        border: none;
        border-radius: 0.5rem;
        padding: 0.5rem 1rem;
        font-size: 0.9rem;
    }
    .cep-search:hover { background: #4A9DAB; }
    .cep-search:disabled { opacity: 0.5; cursor: not-allowed; }
    .cep-error { font-size: 0.75rem; color: #ef4444; margin-top: 0.25rem; }
    .address-card, .carrier-card {
        background: #fff;
        border: 1px solid #e5e7eb;
        border-radius: 0.5rem;
        padding: 0.75rem;
        font-size: 0.85rem;
    }
    .address-card { display: flex; gap: 0.5rem; }
    .address-card i { color: #16a34a; margin-top: 0.15rem; }
    .address-line { font-weight: 500; color: #374151; }
    .address-detail { font-size: 0.8rem; color: #4b5563; }
    .carrier-card {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 0.75rem;
    }
    .carrier-info { display: flex; align-items: center; gap: 0.75rem; min-width: 0; }
    .carrier-info img { width: 2.5rem; height: 2.5rem; object-fit: contain; }
    .carrier-name { font-weight: 500; color: #374151; }
    .carrier-detail { font-size: 0.8rem; color: #4b5563; }
    .carrier-detail b { color: #16a34a; }
    .free-shipping {
        color: #16a34a;
        font-weight: 600;
        font-size: 0.85rem;
        white-space: nowrap;
    }
    .guarantee-row {
        display: flex;
        gap: 0.75rem;
        font-size: 0.85rem;
        align-items: flex-start;
    }
    .guarantee-row i { color: #16a34a; margin-top: 0.15rem; }
    .guarantee-row b { color: #16a34a; }
    .guarantee-row span { color: #4b5563; }
    .buy-button {
        width: 100%;
        background: #22c55e;
        color: #fff;
        border: none;
        border-radius: 0.5rem;
        padding: 1.2rem;
        font-size: 1.1rem;
        font-weight: 600;
    }
    .buy-button:hover { background: #16a34a; }
    .buy-button:active { background: #15803d; }
    .description h2 {
        font-size: 1.8rem;
        font-weight: 700;
        color: #000;
        margin-bottom: 1.5rem;
    }
    .description h3 {
        font-size: 1.3rem;
        font-weight: 600;
        color: #000;
        margin-bottom: 1rem;
    }
    .description section + section { margin-top: 2rem; }
    .description p, .description li { font-size: 0.95rem; color: #4b5563; line-height: 1.6; }
    .description ul, .description ol { list-style: none; }
    .description li {
        display: flex;
        gap: 0.75rem;
        align-items: flex-start;
        margin-bottom: 0.75rem;
    }
    .description li i { color: #5DAFBD; margin-top: 0.2rem; }
    .step-number {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: 1.5rem;
        height: 1.5rem;
        border-radius: 9999px;
        background: #5DAFBD;
        color: #fff;
        font-size: 0.85rem;
        font-weight: 600;
        flex-shrink: 0;
    }
    .quote-card {
        background: #f9fafb;
        border-radius: 0.5rem;
        padding: 1rem;
        margin-bottom: 1rem;
    }
    .quote-card em { display: block; margin-bottom: 0.5rem; }
    .quote-card span { font-size: 0.85rem; color: #6b7280; }
    .promo-banner {
        background: linear-gradient(to right, rgba(93, 175, 189, 0.1), #f0fdf4);
        border-radius: 0.5rem;
        padding: 1.5rem;
    }
    .faq-item { margin-bottom: 1rem; display: flex; gap: 0.75rem; }
    .faq-item i { color: #5DAFBD; margin-top: 0.2rem; }
    .faq-item h4 { color: #5DAFBD; font-size: 0.95rem; margin-bottom: 0.3rem; }
    .highlight { color: #5DAFBD; font-weight: 600; }
"#;

#[function_component(ProductPage)]
pub fn product_page() -> Html {
    let selected_kit = use_state(|| 1u32);
    let carousel = use_state(|| Carousel::new(catalog::gallery_for_kit(1).len()));
    let quantity = use_state(|| 1u32);

    let cep_value = use_state(String::new);
    let address = use_state(|| None::<Address>);
    let cep_error = use_state(|| None::<CepError>);
    let loading_cep = use_state(|| false);
    let lookup_seq = use_mut_ref(LookupSequence::default);

    let show_sticky = use_state(|| false);
    let buy_button_ref = use_node_ref();
    let swipe = use_mut_ref(SwipeTracker::default);

    // Watch the primary buy button; the sticky bar mirrors it once its
    // bottom edge passes the viewport top.
    {
        let show_sticky = show_sticky.clone();
        let buy_button_ref = buy_button_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor =
                    scroll::watch_scroll(sticky::SCROLL_DEBOUNCE_MS, move || {
                        if let Some(button) = buy_button_ref.cast::<web_sys::Element>() {
                            let rect = button.get_bounding_client_rect();
                            show_sticky.set(sticky::sticky_visible(rect.bottom()));
                        }
                    });
                move || destructor()
            },
            (),
        );
    }

    let gallery = catalog::gallery_for_kit(*selected_kit);
    let kit = catalog::kit_for_units(*selected_kit);
    let current_image = gallery
        .get(carousel.index())
        .copied()
        .unwrap_or("/placeholder.svg");
    let kit_plural = if kit.units > 1 { "S" } else { "" };

    let on_select_kit = {
        let selected_kit = selected_kit.clone();
        let carousel = carousel.clone();
        Callback::from(move |units: u32| {
            let gallery_len = catalog::gallery_for_kit(units).len();
            selected_kit.set(units);
            // A new kit starts on its own lead image.
            carousel.set(Carousel::new(gallery_len));
        })
    };

    let next_image = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };
    let prev_image = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.previous()))
    };
    let jump_to_image = {
        let carousel = carousel.clone();
        Callback::from(move |index: usize| carousel.set(carousel.jump_to(index)))
    };

    let on_touch_start = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                swipe.borrow_mut().begin(touch.client_x());
            }
        })
    };
    let on_touch_move = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                swipe.borrow_mut().track(touch.client_x());
            }
        })
    };
    let on_touch_end = {
        let swipe = swipe.clone();
        let carousel = carousel.clone();
        Callback::from(move |_: TouchEvent| match swipe.borrow_mut().finish() {
            SwipeOutcome::Next => carousel.set(carousel.next()),
            SwipeOutcome::Previous => carousel.set(carousel.previous()),
            SwipeOutcome::None => {}
        })
    };

    let decrement_quantity = {
        let quantity = quantity.clone();
        Callback::from(move |_: MouseEvent| {
            quantity.set(catalog::clamp_quantity(quantity.saturating_sub(1)));
        })
    };
    let increment_quantity = {
        let quantity = quantity.clone();
        Callback::from(move |_: MouseEvent| quantity.set(*quantity + 1))
    };
    let on_quantity_input = {
        let quantity = quantity.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            quantity.set(catalog::parse_quantity(&input.value()));
        })
    };

    // Shared by the input trigger (at 8 digits) and the search button.
    let fetch_address = {
        let address = address.clone();
        let cep_error = cep_error.clone();
        let loading_cep = loading_cep.clone();
        let lookup_seq = lookup_seq.clone();
        Callback::from(move |raw: String| {
            let clean = cep::clean_cep(&raw);
            if clean.len() != cep::CEP_DIGITS {
                cep_error.set(Some(CepError::InvalidLength));
                return;
            }
            let ticket = lookup_seq.borrow_mut().issue();
            loading_cep.set(true);
            cep_error.set(None);

            let address = address.clone();
            let cep_error = cep_error.clone();
            let loading_cep = loading_cep.clone();
            let lookup_seq = lookup_seq.clone();
            spawn_local(async move {
                let result = viacep::fetch_address(&clean).await;
                if !lookup_seq.borrow().is_current(ticket) {
                    // A newer lookup owns the loading flag and the result.
                    gloo_console::log!("discarding stale CEP lookup response");
                    return;
                }
                loading_cep.set(false);
                match result {
                    Ok(found) => {
                        address.set(Some(found));
                        cep_error.set(None);
                    }
                    Err(err) => {
                        address.set(None);
                        cep_error.set(Some(err));
                    }
                }
            });
        })
    };

    let on_cep_input = {
        let cep_value = cep_value.clone();
        let address = address.clone();
        let cep_error = cep_error.clone();
        let fetch_address = fetch_address.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let formatted = cep::format_cep(&input.value());
            input.set_value(&formatted);
            cep_value.set(formatted.clone());
            if cep::ready_for_lookup(&formatted) {
                fetch_address.emit(formatted);
            } else {
                address.set(None);
                cep_error.set(None);
            }
        })
    };
    let on_cep_search = {
        let cep_value = cep_value.clone();
        let fetch_address = fetch_address.clone();
        Callback::from(move |_: MouseEvent| fetch_address.emit((*cep_value).clone()))
    };
    let cep_search_disabled = *loading_cep || !cep::ready_for_lookup(&cep_value);

    let on_buy = {
        let selected_kit = selected_kit.clone();
        let quantity = quantity.clone();
        Callback::from(move |_: MouseEvent| {
            let kit = catalog::kit_for_units(*selected_kit);
            let url = checkout::checkout_url(kit, *quantity);
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().set_href(&url) {
                    log::error!("checkout redirect failed: {err:?}");
                }
            }
        })
    };

    html! {
        <div>
            <link
                rel="stylesheet"
                href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css"
                crossorigin="anonymous"
                referrerpolicy="no-referrer"
            />
            <style>{PAGE_CSS}</style>
            <Header />
            <main class="page-main">
                <div class="card">
                    <div class="product-layout">
                        <div class="thumb-rail">
                            { for gallery.iter().enumerate().map(|(index, image)| {
                                let jump = {
                                    let jump_to_image = jump_to_image.clone();
                                    Callback::from(move |_| jump_to_image.emit(index))
                                };
                                let class = if carousel.index() == index { "active" } else { "" };
                                html! {
                                    <button class={class} onclick={jump}>
                                        <img src={*image} alt={format!("Miniatura {}", index + 1)} />
                                    </button>
                                }
                            }) }
                        </div>

                        <div class="gallery">
                            <div
                                class="gallery-frame"
                                ontouchstart={on_touch_start}
                                ontouchmove={on_touch_move}
                                ontouchend={on_touch_end}
                            >
                                <img src={current_image} alt="GlicoMax" />
                                <button
                                    class="gallery-arrow left"
                                    onclick={prev_image}
                                    aria-label="Imagem anterior"
                                >
                                    <i class="fas fa-chevron-left"></i>
                                </button>
                                <button
                                    class="gallery-arrow right"
                                    onclick={next_image}
                                    aria-label="Próxima imagem"
                                >
                                    <i class="fas fa-chevron-right"></i>
                                </button>
                                <div class="gallery-dots">
                                    { for (0..gallery.len()).map(|index| {
                                        let jump = {
                                            let jump_to_image = jump_to_image.clone();
                                            Callback::from(move |_| jump_to_image.emit(index))
                                        };
                                        let class = if carousel.index() == index { "active" } else { "" };
                                        html! {
                                            <button
                                                class={class}
                                                onclick={jump}
                                                aria-label={format!("Ir para imagem {}", index + 1)}
                                            />
                                        }
                                    }) }
                                </div>
                            </div>
                        </div>

                        <div class="product-details">
                            <div>
                                <div class="verified-row">
                                    <i class="fas fa-circle-check"></i>
                                    <span>{"Site Oficial de Vendas"}</span>
                                </div>
                                <p class="sold-row">
                                    {"Novo | "}{ config::UNITS_SOLD }{" Vendidos"}
                                </p>
                                <h1 class="product-title">{ config::PRODUCT_NAME }</h1>
                                <p class="item-code">
                                    { format!("(Cód. Item {}) | ", config::ITEM_CODE) }
                                    <a href="#">{"Disponível em estoque."}</a>
                                </p>
                            </div>

                            <div>
                                <p class="kit-label">
                                    { format!("QUANTIDADE: KIT {} UNIDADE{}", kit.units, kit_plural) }
                                </p>
                                <div class="kit-row">
                                    { for KIT_OPTIONS.iter().map(|option| {
                                        let select = {
                                            let on_select_kit = on_select_kit.clone();
                                            let units = option.units;
                                            Callback::from(move |_| on_select_kit.emit(units))
                                        };
                                        let class = if option.units == kit.units { "active" } else { "" };
                                        html! {
                                            <button class={class} onclick={select}>
                                                <img src={option.image} alt={format!("Kit {}", option.units)} />
                                            </button>
                                        }
                                    }) }
                                </div>
                            </div>

                            <div class="price-block">
                                <p>
                                    <span class="price-label">{"Preço:"}</span>
                                    <span class="price-original">
                                        { format!("R$ {:.0}", kit.original_price) }
                                    </span>
                                </p>
                                <p>
                                    <span class="price-current">
                                        { format!("R$ {}", format_brl(kit.price)) }
                                    </span>
                                    <span class="price-discount">
                                        <i class="fas fa-arrow-down"></i>
                                        { format!(" {}%", kit.discount) }
                                    </span>
                                </p>
                                <p class="installment-line">
                                    {"Em até 12x de "}
                                    <b>{ format!("R$ {}", format_brl(kit.installment)) }</b>
                                </p>
                                <span class="discount-badge">
                                    { format!("R$ {} de desconto", format_brl(kit.discount_amount)) }
                                </span>
                            </div>

                            <div class="qty-row">
                                <span>{"Quantidade:"}</span>
                                <div class="qty-stepper">
                                    <button
                                        onclick={decrement_quantity.clone()}
                                        disabled={*quantity <= 1}
                                        aria-label="Diminuir quantidade"
                                    >
                                        <i class="fas fa-minus"></i>
                                    </button>
                                    <input
                                        type="number"
                                        value={quantity.to_string()}
                                        oninput={on_quantity_input}
                                    />
                                    <button
                                        onclick={increment_quantity.clone()}
                                        aria-label="Aumentar quantidade"
                                    >
                                        <i class="fas fa-plus"></i>
                                    </button>
                                </div>
                            </div>

                            <div class="shipping-box">
                                <div>
                                    <label for="cep">{"Calcular frete e prazo de entrega"}</label>
                                    <div class="cep-row">
                                        <div style="flex: 1;">
                                            <input
                                                id="cep"
                                                type="text"
                                                placeholder="00000-000"
                                                maxlength="9"
                                                value={(*cep_value).clone()}
                                                oninput={on_cep_input}
                                            />
                                            if let Some(err) = *cep_error {
                                                <p class="cep-error">{ err.to_string() }</p>
                                            }
                                        </div>
                                        <button
                                            class="cep-search"
                                            onclick={on_cep_search}
                                            disabled={cep_search_disabled}
                                            aria-label="Buscar CEP"
                                        >
                                            if *loading_cep {
                                                <i class="fas fa-spinner fa-spin"></i>
                                            } else {
                                                <i class="fas fa-location-dot"></i>
                                            }
                                        </button>
                                    </div>
                                </div>

                                if let Some(found) = &*address {
                                    <div class="address-card">
                                        <i class="fas fa-location-dot"></i>
                                        <div>
                                            <p class="address-line">{ &found.logradouro }</p>
                                            <p class="address-detail">
                                                { format!("{}, {} - {}", found.bairro, found.localidade, found.uf) }
                                            </p>
                                        </div>
                                    </div>
                                }

                                <div class="carrier-card">
                                    <div class="carrier-info">
                                        <img src="/correios-logo.png" alt="Correios" />
                                        <div>
                                            <p class="carrier-name">{"Entrega via Correios ©"}</p>
                                            <p class="carrier-detail">
                                                if let Some(found) = &*address {
                                                    {"para "}
                                                    <b>{ format!("{} - {}", found.localidade, found.uf) }</b>
                                                } else {
                                                    {"Informe seu CEP para calcular"}
                                                }
                                            </p>
                                        </div>
                                    </div>
                                    <span class="free-shipping">{"Frete Grátis"}</span>
                                </div>
                            </div>

                            <div class="guarantee-row">
                                <i class="fas fa-rotate-left"></i>
                                <p>
                                    <b>{"Devolução grátis."}</b>
                                    <span>{" Até 7 dias a partir do recebimento."}</span>
                                </p>
                            </div>
                            <div class="guarantee-row">
                                <i class="fas fa-circle-check"></i>
                                <p>
                                    <b>{"Compra Garantida."}</b>
                                    <span>{" Ou seu dinheiro de volta"}</span>
                                </p>
                            </div>

                            <button class="buy-button" ref={buy_button_ref.clone()} onclick={on_buy.clone()}>
                                {"Comprar agora"}
                            </button>
                        </div>
                    </div>
                </div>

                <div class="card description">
                    <h2>{"GlicoMax - Controle Sua Glicose Sem Dor e Com Precisão"}</h2>

                    <section>
                        <h3>{"O Futuro do Monitoramento da Glicose Chegou!"}</h3>
                        <p>
                            <b>{"Cansado de furar os dedos todos os dias?"}</b>
                            {" Com o "}<span class="highlight">{"GlicoMax"}</span>
                            {", você monitora seus níveis de glicose de forma rápida, indolor e \
                              precisa. Graças à tecnologia a laser de última geração, agora é \
                              possível acompanhar sua saúde sem complicações."}
                        </p>
                    </section>

                    <section>
                        <h3>{"Por que escolher o GlicoMax?"}</h3>
                        <ul>
                            <li>
                                <i class="fas fa-droplet"></i>
                                <p><b>{"Sem agulhas, sem dor:"}</b>{" Tecnologia revolucionária que elimina a necessidade de lancetas e fitas de teste."}</p>
                            </li>
                            <li>
                                <i class="fas fa-bolt"></i>
                                <p><b>{"Resultados instantâneos:"}</b>{" Medidas em segundos, direto na tela do dispositivo."}</p>
                            </li>
                            <li>
                                <i class="fas fa-shield-halved"></i>
                                <p><b>{"100% Seguro e Confiável:"}</b>{" Aprovado por especialistas e rigorosamente testado."}</p>
                            </li>
                            <li>
                                <i class="fas fa-thumbs-up"></i>
                                <p><b>{"Fácil de usar:"}</b>{" Design intuitivo para todas as idades."}</p>
                            </li>
                            <li>
                                <i class="fas fa-mobile-screen"></i>
                                <p><b>{"Conexão com seu smartphone:"}</b>{" Acompanhe seu histórico de medições no aplicativo dedicado."}</p>
                            </li>
                        </ul>
                    </section>

                    <section>
                        <h3>{"Quem deve usar o GlicoMax?"}</h3>
                        <ul>
                            <li>
                                <i class="fas fa-circle-check"></i>
                                <p>{"Pessoas com diabetes tipo 1 e tipo 2."}</p>
                            </li>
                            <li>
                                <i class="fas fa-circle-check"></i>
                                <p>{"Quem quer evitar desconforto em medições diárias."}</p>
                            </li>
                            <li>
                                <i class="fas fa-circle-check"></i>
                                <p>{"Qualquer pessoa que deseja monitorar a saúde de forma moderna e eficiente."}</p>
                            </li>
                        </ul>
                    </section>

                    <section>
                        <h3>{"Como Funciona?"}</h3>
                        <ol>
                            <li>
                                <span class="step-number">{"1"}</span>
                                <p>{"Posicione o dispositivo no dedo."}</p>
                            </li>
                            <li>
                                <span class="step-number">{"2"}</span>
                                <p>{"Pressione o botão para iniciar a leitura."}</p>
                            </li>
                            <li>
                                <span class="step-number">{"3"}</span>
                                <p>{"Veja os resultados na tela."}</p>
                            </li>
                        </ol>
                    </section>

                    <section>
                        <h3>{"Depoimentos de Quem Já Usa"}</h3>
                        <div class="quote-card">
                            <p><em>{"\"O GlicoMax mudou minha rotina! Agora não preciso mais sofrer com picadas. Muito mais prático e rápido.\""}</em></p>
                            <span>{"Ana Luiza, 42 anos."}</span>
                        </div>
                        <div class="quote-card">
                            <p><em>{"\"Tecnologia que realmente faz diferença. Fácil de usar e extremamente confiável.\""}</em></p>
                            <span>{"Carlos Eduardo, 38 anos."}</span>
                        </div>
                    </section>

                    <section class="promo-banner">
                        <h3>{"Promoção Exclusiva por Tempo Limitado!"}</h3>
                        <p>
                            {"Garanta o seu "}<span class="highlight">{"GlicoMax"}</span>
                            {" hoje mesmo e receba "}<b>{"frete grátis"}</b>
                            {" para todo o Brasil. Aproveite a oferta especial e monitore sua \
                              glicose com praticidade e precisão."}
                        </p>
                    </section>

                    <section>
                        <h3>{"Perguntas Frequentes (FAQ)"}</h3>
                        <div class="faq-item">
                            <i class="fas fa-circle-question"></i>
                            <div>
                                <h4>{"O GlicoMax é confiável?"}</h4>
                                <p>{"Sim! O dispositivo foi rigorosamente testado e aprovado por instituições renomadas na área de saúde."}</p>
                            </div>
                        </div>
                        <div class="faq-item">
                            <i class="fas fa-circle-question"></i>
                            <div>
                                <h4>{"Preciso conectar ao celular para usar?"}</h4>
                                <p>{"Não. O GlicoMax funciona de forma independente."}</p>
                            </div>
                        </div>
                        <div class="faq-item">
                            <i class="fas fa-circle-question"></i>
                            <div>
                                <h4>{"Como é feita a limpeza do aparelho?"}</h4>
                                <p>{"Basta passar um pano macio e álcool 70% na superfície."}</p>
                            </div>
                        </div>
                    </section>
                </div>

                <ReviewSection />
            </main>
            <Footer />
            <StickyBar
                visible={*show_sticky}
                kit={*kit}
                quantity={*quantity}
                on_decrement={decrement_quantity}
                on_increment={increment_quantity}
                on_buy={on_buy}
            />
        </div>
    }
}
