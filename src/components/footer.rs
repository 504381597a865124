use yew::prelude::*;

const POLICY_LINKS: [&str; 5] = [
    "Aviso Legal",
    "Termos de Uso",
    "Políticas de Envio e Frete",
    "Políticas de Devolução e Reembolso",
    "Políticas de Privacidade",
];

#[function_component(Footer)]
pub fn footer() -> Html {
    // Accordion sections: support opens by default, policies closed.
    let support_open = use_state(|| true);
    let policies_open = use_state(|| false);

    let toggle_support = {
        let support_open = support_open.clone();
        Callback::from(move |_| support_open.set(!*support_open))
    };
    let toggle_policies = {
        let policies_open = policies_open.clone();
        Callback::from(move |_| policies_open.set(!*policies_open))
    };

    let footer_css = r#"
        .site-footer {
            background: #000;
            color: #fff;
            margin-top: 2rem;
        }
        .footer-inner {
            max-width: 80rem;
            margin: 0 auto;
            padding: 1.5rem 1rem;
        }
        .footer-section {
            border-bottom: 1px solid #374151;
        }
        .footer-section > button {
            width: 100%;
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 1rem 0;
            background: none;
            border: none;
            color: #fff;
            font-size: 0.95rem;
            font-weight: 600;
            text-transform: uppercase;
            letter-spacing: 0.05em;
        }
        .footer-body {
            padding-bottom: 1.5rem;
            font-size: 0.9rem;
            line-height: 1.7;
        }
        .footer-body a { color: #60a5fa; }
        .footer-body ul { list-style: none; }
        .footer-body li a { color: #fff; text-decoration: none; }
        .footer-body li a:hover { color: #d1d5db; }
        .footer-copyright {
            padding: 1.5rem 0;
            font-size: 0.8rem;
            color: #9ca3af;
        }
    "#;

    html! {
        <footer class="site-footer">
            <style>{footer_css}</style>
            <div class="footer-inner">
                <div class="footer-section">
                    <button onclick={toggle_support}>
                        <span>{"CENTRAL DE ATENDIMENTO"}</span>
                        if *support_open {
                            <i class="fas fa-minus"></i>
                        } else {
                            <i class="fas fa-plus"></i>
                        }
                    </button>
                    if *support_open {
                        <div class="footer-body">
                            <p><b>{"Horário de atendimento:"}</b>{" Seg a sex, das 08hs às 17h."}</p>
                            <p><b>{"Contato:"}</b>{" "}<a href="tel:+5521995869198">{"(21) 99586-9198"}</a></p>
                            <p><b>{"E-mail:"}</b>{" "}<a href="mailto:sac@rdigitalexpress.com.br">{"sac@rdigitalexpress.com.br"}</a></p>
                            <p><b>{"CNPJ:"}</b>{" 21.643.638/0001-10"}</p>
                            <p><b>{"Endereço:"}</b>{" Avenida Manoel Duarte, 15995, Parque Lafaiete, CEP: 25015-331 Duque de Caxias - RJ"}</p>
                        </div>
                    }
                </div>
                <div class="footer-section">
                    <button onclick={toggle_policies}>
                        <span>{"POLÍTICAS"}</span>
                        if *policies_open {
                            <i class="fas fa-minus"></i>
                        } else {
                            <i class="fas fa-plus"></i>
                        }
                    </button>
                    if *policies_open {
                        <div class="footer-body">
                            <ul>
                                { for POLICY_LINKS.iter().map(|link| html! {
                                    <li><a href="#">{ *link }</a></li>
                                }) }
                            </ul>
                        </div>
                    }
                </div>
                <div class="footer-copyright">
                    <p>{"© Compra Segura"}</p>
                    <p>{"CNPJ: 21.643.638/0001-10. Todos Os Direitos Reservados © 2015."}</p>
                </div>
            </div>
        </footer>
    }
}
