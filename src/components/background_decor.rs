//! Fixed page-background decoration: gradient blobs and a dot grid.

use leptos::prelude::*;

/// Non-interactive backdrop rendered behind all page content.
#[component]
pub fn BackgroundDecor() -> impl IntoView {
    view! {
        <div class="bg-decor" aria-hidden="true">
            <div class="bg-decor__blob bg-decor__blob--top"></div>
            <div class="bg-decor__blob bg-decor__blob--bottom"></div>
            <svg class="bg-decor__grid" xmlns="http://www.w3.org/2000/svg">
                <defs>
                    <pattern id="bg-dots" x="0" y="0" width="24" height="24" patternUnits="userSpaceOnUse">
                        <circle cx="1" cy="1" r="1" fill="#10b981"></circle>
                    </pattern>
                </defs>
                <rect width="100%" height="100%" fill="url(#bg-dots)"></rect>
            </svg>
        </div>
    }
}
