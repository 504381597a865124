use yew::prelude::*;

use crate::catalog::{format_brl, Kit};

#[derive(Properties, PartialEq, Clone)]
pub struct StickyBarProps {
    pub visible: bool,
    pub kit: Kit,
    pub quantity: u32,
    pub on_decrement: Callback<MouseEvent>,
    pub on_increment: Callback<MouseEvent>,
    pub on_buy: Callback<MouseEvent>,
}

/// Fixed duplicate call-to-action shown once the primary buy button has
/// scrolled out of view.
#[function_component(StickyBar)]
pub fn sticky_bar(props: &StickyBarProps) -> Html {
    let kit = &props.kit;
    let plural = if kit.units > 1 { "s" } else { "" };

    let bar_css = r#"
        .sticky-bar {
            position: fixed;
            bottom: 0;
            left: 0;
            right: 0;
            background: #fff;
            border-top: 1px solid #e5e7eb;
            box-shadow: 0 -10px 25px rgba(0, 0, 0, 0.1);
            z-index: 50;
            transition: transform 0.5s, opacity 0.5s;
        }
        .sticky-bar.hidden {
            transform: translateY(100%);
            opacity: 0;
        }
        .sticky-bar-inner {
            max-width: 80rem;
            margin: 0 auto;
            padding: 0.75rem 1rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
            gap: 1rem;
        }
        .sticky-product {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            min-width: 0;
        }
        .sticky-product img {
            width: 3.5rem;
            height: 3.5rem;
            object-fit: contain;
        }
        .sticky-kit-label {
            font-size: 0.85rem;
            color: #4b5563;
        }
        .sticky-price {
            font-size: 1.3rem;
            font-weight: 700;
            color: #22c55e;
        }
        .sticky-discount-badge {
            background: #22c55e;
            color: #fff;
            font-size: 0.75rem;
            border-radius: 0.25rem;
            padding: 0.1rem 0.4rem;
            margin-left: 0.5rem;
        }
        .sticky-qty {
            display: none;
            align-items: center;
            gap: 0.5rem;
            font-size: 0.9rem;
            color: #4b5563;
        }
        .sticky-qty-stepper {
            display: flex;
            align-items: center;
            border: 1px solid #d1d5db;
            border-radius: 0.5rem;
            overflow: hidden;
        }
        .sticky-qty-stepper button {
            padding: 0.5rem;
            background: none;
            border: none;
        }
        .sticky-qty-stepper button:disabled { opacity: 0.4; cursor: default; }
        .sticky-qty-stepper span {
            min-width: 2.5rem;
            text-align: center;
            font-weight: 500;
        }
        .sticky-buy {
            background: #22c55e;
            color: #fff;
            border: none;
            border-radius: 0.5rem;
            padding: 0.8rem 1.8rem;
            font-size: 0.95rem;
            font-weight: 600;
            white-space: nowrap;
        }
        .sticky-buy:hover { background: #16a34a; }
        @media (min-width: 640px) {
            .sticky-qty { display: flex; }
        }
    "#;

    html! {
        <div class={if props.visible { "sticky-bar" } else { "sticky-bar hidden" }}>
            <style>{bar_css}</style>
            <div class="sticky-bar-inner">
                <div class="sticky-product">
                    <img src={kit.image} alt="GlicoMax" />
                    <div>
                        <p class="sticky-kit-label">{ format!("Kit {} Unidade{}", kit.units, plural) }</p>
                        <span class="sticky-price">{ format!("R$ {}", format_brl(kit.price)) }</span>
                        <span class="sticky-discount-badge">{ format!("-{}%", kit.discount) }</span>
                    </div>
                </div>
                <div class="sticky-qty">
                    <span>{"Qtd:"}</span>
                    <div class="sticky-qty-stepper">
                        <button
                            onclick={props.on_decrement.clone()}
                            disabled={props.quantity <= 1}
                            aria-label="Diminuir quantidade"
                        >
                            <i class="fas fa-minus"></i>
                        </button>
                        <span>{ props.quantity }</span>
                        <button onclick={props.on_increment.clone()} aria-label="Aumentar quantidade">
                            <i class="fas fa-plus"></i>
                        </button>
                    </div>
                </div>
                <button class="sticky-buy" onclick={props.on_buy.clone()}>
                    {"Comprar agora"}
                </button>
            </div>
        </div>
    }
}
