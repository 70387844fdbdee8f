//! src/routes/home/page.rs
use htmlescape::encode_minimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"<div class="toast toast-{kind}" role="alert" data-dismiss-after="5000">
    <span class="toast-message">{message}</span>
    <button type="button" class="toast-close" aria-label="Close">&times;</button>
</div>"#,
            kind = self.kind.as_str(),
            message = encode_minimal(&self.message),
        )
    }
}

pub fn success_modal() -> &'static str {
    r#"<div class="modal" role="dialog" aria-modal="true" aria-labelledby="modal-title">
    <div class="modal-body">
        <h3 id="modal-title">Thank You!</h3>
        <p>You've successfully joined our waitlist! We'll notify you when we launch.</p>
        <p>Follow my journey building MarketingAI and get exclusive updates:</p>
        <a class="button" href="https://x.com/piyushkkr" target="_blank" rel="noopener">Follow @piyushkkr on X</a>
        <button type="button" class="modal-close">Close this message</button>
    </div>
</div>"#
}

fn signup_form() -> &'static str {
    r#"<form class="waitlist-form" action="/waitlist/form" method="post">
    <input type="email" name="email" placeholder="Enter your email" required>
    <button type="submit">Join Waitlist</button>
</form>"#
}

const STEPS: [(&str, &str); 4] = [
    (
        "Select / Create Buyer Avatar",
        "Enter your business and product details \u{2014} our AI will instantly generate your ideal buyer persona, complete with detailed psychographics.",
    ),
    (
        "Define Your Product",
        "You can either choose a product you've already added to your list, or create a brand-new one by submitting a few quick details. This helps us tailor your campaign content to fit your product perfectly",
    ),
    (
        "Select Channels & Goals",
        "Select Marketing channels you want to campaign on (Emails, SMS, Paid Ads, and much more) and select campaign objective, be it conversions, engagement, or awareness.",
    ),
    (
        "Get Your Campaign",
        "Get a fully done-for-you, AI-powered marketing campaign \u{2014} complete with launch-ready content, channel-wise breakdowns and detailed execution schedule. Just Plug and Play",
    ),
];

const UPCOMING: [(&str, &str); 6] = [
    (
        "Execute Campaigns",
        "Directly execute your campaigns on autopilot and track performance on the platform itself. No more switching between tools.",
    ),
    (
        "All Major Channels",
        "Run campaigns across all major marketing channels from a single platform. Social media, email, PPC, and more.",
    ),
    (
        "Visual Content",
        "Get personalised ad creatives, social media posts, carousels, and more as part of your campaign.",
    ),
    (
        "Webpages",
        "Let us handle creating all the required webpages your campaign needs: landing pages, lead magnets, sales pages, and more.",
    ),
    (
        "Video Content",
        "Get high-performing videos created automatically for your campaigns, optimized for engagement and conversions.",
    ),
    (
        "And More Coming",
        "We're constantly adding new features based on user feedback. Join the waitlist to influence what we build next.",
    ),
];

const BENEFITS: [(&str, &str); 3] = [
    (
        "AI-Powered Insights",
        "Our AI analyzes market trends and consumer behavior to create highly effective campaigns with predictive performance metrics.",
    ),
    (
        "Time Efficiency",
        "Create complete marketing campaigns in minutes instead of days or weeks, allowing your team to focus on strategic initiatives.",
    ),
    (
        "Multi-Channel Support",
        "Deploy your campaigns across multiple platforms with consistent messaging and branding, optimized for each channel's unique requirements.",
    ),
];

const FAQ: [(&str, &str); 6] = [
    (
        "How does Project M generate marketing campaigns?",
        "Project M analyses your business, product, and target audience. It then creates personalized marketing campaigns based on proven strategies and best practices in your industry. The AI continuously learns and improves from successful campaigns to deliver better results over time.",
    ),
    (
        "When will Project M be available?",
        "We're currently in the final stages of development and plan to launch in the coming weeks. Join our waitlist to be among the first to get access and receive updates on our progress.",
    ),
    (
        "What marketing channels does Project M support?",
        "As we are building MVP version 1 so we are making Emails, X, SMS, WhatsApp & Reddit campaigns available. We are working on launching all major channels in the MVP version 2 based on channel popularity and user feedback",
    ),
    (
        "Do I need marketing experience to use Project M?",
        "No, Project M is designed to be user-friendly for everyone, regardless of marketing experience. Our platform handles the complex strategy work while providing you with an intuitive interface to input your business information and goals.",
    ),
    (
        "How much does Project M cost?",
        "We'll offer several pricing tiers to accommodate businesses of all sizes. Pricing details will be announced closer to launch, but waitlist members will receive special early-bird pricing and exclusive offers.",
    ),
    (
        "Can I customize the campaigns generated by Project M?",
        "While Project M creates complete campaigns automatically, you'll have full control to review, edit, regenerate & customize any aspect before launching. Our platform provides the perfect balance between automation and customization.",
    ),
];

fn cards(items: &[(&str, &str)]) -> String {
    items
        .iter()
        .map(|(title, text)| {
            format!(
                "<li><h3>{}</h3><p>{}</p></li>",
                encode_minimal(title),
                encode_minimal(text)
            )
        })
        .collect()
}

/// The static part of the landing page. Toasts and the modal are added per
/// request by [`document`].
pub fn landing_page() -> String {
    let steps: String = STEPS
        .iter()
        .enumerate()
        .map(|(i, (title, text))| {
            format!(
                "<li><span class=\"step\">{}</span><h3>{}</h3><p>{}</p></li>",
                i + 1,
                encode_minimal(title),
                encode_minimal(text)
            )
        })
        .collect();

    let faq: String = FAQ
        .iter()
        .map(|(question, answer)| {
            format!(
                "<details><summary>{}</summary><p>{}</p></details>",
                encode_minimal(question),
                encode_minimal(answer)
            )
        })
        .collect();

    format!(
        r##"<header>
    <span class="brand">Project M</span>
    <nav><a href="#features">Features</a><a href="#roadmap">Roadmap</a><a href="#faq">FAQ</a></nav>
</header>
<section id="hero">
    <span class="badge">Currently in private beta</span>
    <h1>Automate Your Marketing <span class="accent">Campaigns</span> with AI</h1>
    <p>Create &amp; Launch personalized marketing campaigns in minutes, not days. Join the waitlist to be among the first to revolutionize your marketing strategy</p>
    {form}
    <p class="hint">We'll notify you when we launch</p>
</section>
<section id="features">
    <span class="badge">How It Works</span>
    <h2>Streamlined Process</h2>
    <p>Our AI-powered platform simplifies marketing campaign creation through a four-step process.</p>
    <ol class="steps">{steps}</ol>
</section>
<section id="roadmap">
    <span class="badge">Product Roadmap</span>
    <h2>Upcoming Features</h2>
    <p>Our development roadmap outlines the powerful features we're building to transform your marketing operations.</p>
    <ul class="upcoming">{upcoming}</ul>
</section>
<section id="benefits">
    <span class="badge">Key Benefits</span>
    <h2>Why Choose Project M</h2>
    <p>Automated Marketing Completely. It would either force you to fire your marketing team or make them 10-times more productive</p>
    <ul class="benefits">{benefits}</ul>
</section>
<section id="follow">
    <h3>Follow My Journey</h3>
    <p>I'm building Project M in public. Follow along to get behind-the-scenes insights, early access, and exclusive updates.</p>
    <a class="button" href="https://x.com/piyushkkr" target="_blank" rel="noopener">Follow @piyushkkr on X</a>
</section>
<section id="faq">
    <span class="badge">FAQ</span>
    <h2>Frequently Asked Questions</h2>
    <p>Find answers to common questions about our platform and services.</p>
    {faq}
</section>
<section id="cta">
    <h2>Be First in Line</h2>
    <p>Join our exclusive waitlist today and get early access to the future of marketing automation.</p>
    {form}
    <p class="hint">By joining, you'll receive product updates and early access opportunities.</p>
</section>
<footer><a href="https://x.com/piyushkkr">@piyushkkr</a></footer>"##,
        form = signup_form(),
        upcoming = cards(&UPCOMING),
        benefits = cards(&BENEFITS),
    )
}

const SCRIPT: &str = r#"<script>
document.querySelectorAll('.toast').forEach(function (toast) {
    var close = function () { toast.remove(); };
    toast.querySelector('.toast-close').addEventListener('click', close);
    setTimeout(close, Number(toast.dataset.dismissAfter));
});
document.querySelectorAll('.modal-close').forEach(function (button) {
    button.addEventListener('click', function () { button.closest('.modal').remove(); });
});
</script>"#;

pub fn document(body: &str, toast: Option<&Toast>, show_modal: bool) -> String {
    let toast_html = toast.map(Toast::render).unwrap_or_default();
    let modal_html = if show_modal { success_modal() } else { "" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <meta name="description" content="Join the waitlist for MarketingAI, the platform that automates your marketing campaigns with AI.">
    <title>MarketingAI - Automated Marketing Campaigns</title>
</head>
<body>
    {toast_html}
    {modal_html}
    {body}
    {SCRIPT}
</body>
</html>"#
    )
}
