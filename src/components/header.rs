use yew::prelude::*;

const NAV_LINKS: [&str; 4] = [
    "Produtos da Loja",
    "Rastrear Pedidos",
    "Sobre Nós",
    "Contatos",
];

#[function_component(Header)]
pub fn header() -> Html {
    let mobile_menu_open = use_state(|| false);

    let toggle_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(!*mobile_menu_open))
    };

    let header_css = r#"
        .site-header {
            background: #5DAFBD;
            color: #fff;
            position: sticky;
            top: 0;
            z-index: 50;
        }
        .shipping-banner {
            background: #4A9DAB;
            padding: 0.5rem 1rem;
            text-align: center;
            font-size: 0.8rem;
            letter-spacing: 0.02em;
        }
        .header-row {
            max-width: 80rem;
            margin: 0 auto;
            padding: 0.75rem 1rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }
        .store-logo {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            font-weight: 700;
            font-size: 1.1rem;
            line-height: 1.1;
        }
        .store-logo small {
            display: block;
            font-weight: 400;
            font-size: 0.75rem;
        }
        .header-nav {
            display: none;
            gap: 1.5rem;
            font-size: 0.9rem;
        }
        .header-nav a, .mobile-menu a {
            color: #fff;
            text-decoration: none;
        }
        .header-nav a:hover, .mobile-menu a:hover { opacity: 0.8; }
        .header-icons {
            display: flex;
            align-items: center;
            gap: 1rem;
        }
        .header-icons button {
            background: none;
            border: none;
            color: #fff;
            font-size: 1.1rem;
        }
        .menu-toggle { display: inline-block; }
        .mobile-menu {
            border-top: 1px solid rgba(255, 255, 255, 0.2);
            padding: 1rem;
        }
        .mobile-menu a {
            display: block;
            padding: 0.5rem 0;
        }
        @media (min-width: 1024px) {
            .header-nav { display: flex; }
            .menu-toggle { display: none; }
        }
    "#;

    html! {
        <header class="site-header">
            <style>{header_css}</style>
            <div class="shipping-banner">
                <i class="fas fa-truck"></i>
                {" FRETE GRÁTIS PARA TODO BRASIL"}
            </div>
            <div class="header-row">
                <div class="store-logo">
                    <i class="fas fa-shopping-cart"></i>
                    <div>
                        {"VAREJO"}
                        <small>{"SHOP"}</small>
                    </div>
                </div>
                <nav class="header-nav">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href="#">{ *link }</a>
                    }) }
                </nav>
                <div class="header-icons">
                    <button aria-label="Buscar"><i class="fas fa-search"></i></button>
                    <button aria-label="Conta"><i class="fas fa-user"></i></button>
                    <button aria-label="Carrinho"><i class="fas fa-shopping-cart"></i></button>
                    <button class="menu-toggle" aria-label="Menu" onclick={toggle_menu}>
                        if *mobile_menu_open {
                            <i class="fas fa-xmark"></i>
                        } else {
                            <i class="fas fa-bars"></i>
                        }
                    </button>
                </div>
            </div>
            if *mobile_menu_open {
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href="#">{ *link }</a>
                    }) }
                </div>
            }
        </header>
    }
}
