use leptos::prelude::*;

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Pricing"</h2>
                    <p class="section-description">
                        "Estimation-first. 50% cheaper than a human developer, guaranteed."
                    </p>
                </div>
                <div class="pricing-grid">
                    <PlanCard
                        tag=Some("One-time")
                        popular=false
                        name="Onboarding"
                        price="€1,000"
                        description="One-time setup for your Odoo."
                    />
                    <PlanCard
                        tag=None
                        popular=true
                        name="AI Only"
                        price="€300/mo"
                        description="Estimation-based pricing per task. 50% cheaper than human devs."
                    />
                    <PlanCard
                        tag=None
                        popular=false
                        name="AI + Human Validation"
                        price="€600/mo"
                        description="Up to 20 user stories/month with human code review."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(
    tag: Option<&'static str>,
    popular: bool,
    name: &'static str,
    price: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="plan-card">
            {popular.then(|| view! { <div class="plan-ribbon">"Popular"</div> })}
            {tag.map(|t| view! { <div class="plan-tag">{t}</div> })}
            <h4 class="plan-name">{name}</h4>
            <div class="plan-price">{price}</div>
            <p class="plan-description">{description}</p>
        </div>
    }
}
