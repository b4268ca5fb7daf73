use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <p class="muted">{"© 2024 Scrambler 400X — Landing Page Conceitual"}</p>
                <a
                    class="muted footer-link"
                    href={config::REPOSITORY_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Ver repositório"}
                </a>
            </div>
            <style>
                {r#"
                    .site-footer {
                        padding: 3rem 0;
                        border-top: 1px solid rgba(184, 189, 195, 0.2);
                        font-size: 0.875rem;
                    }

                    .footer-content {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                    }

                    .footer-link {
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }

                    .footer-link:hover {
                        color: #F3F4F2;
                    }
                "#}
            </style>
        </footer>
    }
}
