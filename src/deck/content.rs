//! The Signal Processing Visualization Platform deck.
use super::builders::{
    ContentLayout, add_call_to_action_slide, add_comparison_table_slide, add_content_slide,
    add_feature_slide, add_stats_slide, add_thank_you_slide, add_title_slide,
};
use super::context::DeckContext;
use crate::common::Result;
use crate::ooxml::pptx::writer::MutablePresentation;

pub const DECK_TITLE: &str = "Signal Processing Visualization Platform";

/// Number of slides [`build_presentation`] produces.
pub const SLIDE_COUNT: usize = 14;

const SUBTITLE: &str = "Making Complex Signal Analysis Simple, Visual, and Accessible";

const CHALLENGE: &[&str] = &[
    "❌ Complex tools with steep learning curves",
    "❌ No real-time visualization of processing effects",
    "❌ Difficult to experiment with different parameters",
    "❌ Poor integration between generation, processing, and analysis",
    "",
    "✅ Our Solution: An all-in-one platform that makes signal processing",
    "    visual, interactive, and accessible",
];

const KEY_FEATURES: &[(&str, &str)] = &[
    (
        "🎵 Multi-Signal Generation",
        "Generate sine, square, sawtooth waves, and white noise with configurable parameters",
    ),
    (
        "⚡ Real-Time Processing",
        "Apply filters and transformations with instant visual feedback",
    ),
    (
        "📊 Interactive Visualization",
        "Professional charting with zoom, pan, and side-by-side comparison",
    ),
    (
        "🔔 Smart Event Detection",
        "Monitor signals with configurable thresholds and automatic event logging",
    ),
];

const SIGNAL_GENERATION: &[&str] = &[
    "🎵 Sine Waves - Pure tones for testing",
    "⬛ Square Waves - Digital signal simulation",
    "📐 Sawtooth Waves - Audio synthesis",
    "📡 White Noise - System testing",
    "",
    "Configure:",
    "  • Frequency, amplitude, phase",
    "  • Duration and sample rate",
    "  • Instant parameter validation",
];

const SIGNAL_PROCESSING: &[&str] = &[
    "🔽 Low-Pass Filters",
    "  Remove high-frequency noise",
    "",
    "🔼 High-Pass Filters",
    "  Eliminate DC offset and low-frequency drift",
    "",
    "🎚️ Band-Pass Filters",
    "  Isolate specific frequency ranges",
    "",
    "📈 Gain Adjustment",
    "  Amplify or attenuate signals",
    "",
    "✨ See effects immediately with side-by-side comparison",
];

const ARCHITECTURE: &[&str] = &[
    "🏗️ Onion Architecture",
    "  • Core Domain Layer - Pure business logic",
    "  • Application Layer - Use case orchestration",
    "  • Infrastructure Layer - Database & services",
    "  • Presentation Layer - REST API + React UI",
    "",
    "💻 Modern Technology Stack",
    "  • Backend: .NET 10 with ASP.NET Core",
    "  • Frontend: React 18 + TypeScript",
    "  • Time-Series DB: InfluxDB (10:1 compression)",
    "  • Metadata DB: MongoDB (flexible storage)",
    "  • API Documentation: Swagger/OpenAPI",
];

const DEMO_FLOW: &[&str] = &[
    "1️⃣ Generate a 1kHz Sine Wave (30 sec)",
    "   • Show parameter panel",
    "   • Click generate",
    "   • Watch waveform appear instantly",
    "",
    "2️⃣ Apply Low-Pass Filter at 500Hz (30 sec)",
    "   • Configure filter parameters",
    "   • Apply processing",
    "   • See both signals side-by-side",
    "",
    "3️⃣ Test Threshold Detection (20 sec)",
    "   • Set threshold to 0.5",
    "   • Input values and trigger events",
    "",
    "4️⃣ Demonstrate Persistence (20 sec)",
    "   • Show historical signal selector",
];

const USE_CASES: &[(&str, &str)] = &[
    (
        "🔬 Research & Development",
        "Test algorithms, validate filter designs, prototype audio/RF systems",
    ),
    (
        "🎓 Education",
        "Teach signal processing concepts with interactive visual demonstrations",
    ),
    (
        "🏭 Quality Control",
        "Monitor production signals, detect anomalies, analyze historical data",
    ),
    (
        "🎵 Audio Engineering",
        "Synthesize test tones, analyze frequency response, validate filter designs",
    ),
];

const COMPARISON: &[&[&str]] = &[
    &["Feature", "Traditional Tools", "Our Platform"],
    &["Learning Curve", "Weeks", "✅ Minutes"],
    &["Real-Time Feedback", "❌ No", "✅ Instant"],
    &["Visual Comparison", "Manual", "✅ Side-by-side"],
    &["Setup Complexity", "High", "✅ One-click"],
    &["Cost", "$$$$", "✅ Local & Free"],
    &["Extensibility", "Limited", "✅ Open Architecture"],
];

const BUSINESS_VALUE: &[&str] = &[
    "For Organizations:",
    "  📈 Reduce development time by 60%",
    "  💰 Lower training costs with intuitive UI",
    "  🤝 Better collaboration with visual results",
    "  ✅ Built-in quality assurance",
    "",
    "For Individuals:",
    "  🚀 Learn faster with visual feedback",
    "  🔬 Experiment freely with instant results",
    "  🏆 Professional-grade algorithms",
    "  🔒 Complete control - all data stays local",
];

const ROADMAP: &[&str] = &[
    "Phase 2 Enhancements:",
    "",
    "📊 Frequency-domain visualization (FFT spectrum)",
    "💾 Export signals to CSV/JSON",
    "📥 Import real-world signal data",
    "🎛️ Additional filter types (notch, all-pass)",
    "🎤 Real-time audio input streaming",
    "➕ Multi-signal arithmetic operations",
    "",
    "Your feedback shapes our roadmap!",
];

const QUICK_STATS: &[(&str, &str)] = &[
    ("⚡ <100ms", "Visualization Updates"),
    ("🗄️ 10:1", "Data Compression"),
    ("🎨 4 Types", "Signal Generation"),
    ("🔧 4 Operations", "Signal Processing"),
    ("🏗️ 4 Layers", "Clean Architecture"),
    ("✅ 100%", "Local Deployment"),
];

const CTA_STEPS: &[&str] = &[
    "1. Clone the repository",
    "2. Run start.ps1 (Windows)",
    "3. Start processing in under 60 seconds",
];

const CTA_CONTACT: &str =
    "Let's discuss how this platform can solve\nyour signal processing challenges";

/// Build the full 14-slide deck in memory.
pub fn build_presentation(ctx: &DeckContext) -> Result<MutablePresentation> {
    let mut pres = MutablePresentation::new();
    pres.set_slide_width(ctx.slide_width);
    pres.set_slide_height(ctx.slide_height);
    pres.set_title(DECK_TITLE);
    pres.set_creator(env!("CARGO_PKG_NAME"));

    add_title_slide(&mut pres, ctx, DECK_TITLE, SUBTITLE);
    add_content_slide(&mut pres, ctx, "The Challenge", CHALLENGE, ContentLayout::Bullet);
    add_feature_slide(&mut pres, ctx, "Key Features", KEY_FEATURES);
    add_content_slide(
        &mut pres,
        ctx,
        "Multi-Signal Generation",
        SIGNAL_GENERATION,
        ContentLayout::Bullet,
    );
    add_content_slide(
        &mut pres,
        ctx,
        "Real-Time Signal Processing",
        SIGNAL_PROCESSING,
        ContentLayout::Bullet,
    );
    add_content_slide(
        &mut pres,
        ctx,
        "Enterprise-Grade Architecture",
        ARCHITECTURE,
        ContentLayout::Bullet,
    );
    add_content_slide(
        &mut pres,
        ctx,
        "Live Demo Flow (3 Minutes)",
        DEMO_FLOW,
        ContentLayout::Bullet,
    );
    add_feature_slide(&mut pres, ctx, "Use Cases Across Industries", USE_CASES);
    add_comparison_table_slide(&mut pres, ctx, "What Makes Us Different", COMPARISON)?;
    add_content_slide(&mut pres, ctx, "Business Value", BUSINESS_VALUE, ContentLayout::Bullet);
    add_content_slide(&mut pres, ctx, "Future Roadmap", ROADMAP, ContentLayout::Bullet);
    add_stats_slide(&mut pres, ctx, "Quick Stats", QUICK_STATS);
    add_call_to_action_slide(
        &mut pres,
        ctx,
        "Ready to Transform Your Workflow?",
        CTA_STEPS,
        CTA_CONTACT,
    );
    add_thank_you_slide(&mut pres, ctx, "Thank You!", DECK_TITLE);

    log::debug!("built {} slides", pres.slide_count());
    Ok(pres)
}
