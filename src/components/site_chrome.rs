//! Site Header and Footer

use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-brand" href="#top">
                <span class="site-brand-icon">"🌐"</span>
                <span class="site-brand-name">"Global Market"</span>
            </a>
            <nav class="site-nav">
                <a href="#top">"Home"</a>
                <a href="#collection">"Browse Stores"</a>
            </nav>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="site-footer-columns">
                <div>
                    <h4>"Global Market"</h4>
                    <p>"Your gateway to discovering exceptional online retailers from around the world."</p>
                </div>
                <div>
                    <h4>"Explore"</h4>
                    <ul>
                        <li><a href="#top">"Home"</a></li>
                        <li><a href="#collection">"Browse Stores"</a></li>
                    </ul>
                </div>
            </div>
            <p class="site-footer-copyright">{format!("© {} Global Market. All rights reserved.", year)}</p>
        </footer>
    }
}
