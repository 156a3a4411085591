use std::path::PathBuf;

use crate::fetch::doc_url;

pub const SWIFT_ROOT: &str = "swift_language_skills";
pub const PLATFORM_ROOT: &str = "platform_skills";
pub const INTELLIGENCE_ROOT: &str = "apple_intelligence_skills";
pub const FRONTEND_ROOT: &str = "frontend_skills";

/// Section of the SwiftUI documentation a topic is listed under. Guidance in
/// the snippet library is keyed by [`TopicGroup::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicGroup {
    AppStructure,
    DataAndStorage,
    Views,
    ViewLayout,
    EventHandling,
    Accessibility,
    FrameworkIntegration,
    ToolSupport,
}

impl TopicGroup {
    pub const ALL: [TopicGroup; 8] = [
        TopicGroup::AppStructure,
        TopicGroup::DataAndStorage,
        TopicGroup::Views,
        TopicGroup::ViewLayout,
        TopicGroup::EventHandling,
        TopicGroup::Accessibility,
        TopicGroup::FrameworkIntegration,
        TopicGroup::ToolSupport,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TopicGroup::AppStructure => "App structure",
            TopicGroup::DataAndStorage => "Data and storage",
            TopicGroup::Views => "Views",
            TopicGroup::ViewLayout => "View layout",
            TopicGroup::EventHandling => "Event handling",
            TopicGroup::Accessibility => "Accessibility",
            TopicGroup::FrameworkIntegration => "Framework integration",
            TopicGroup::ToolSupport => "Tool support",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SwiftUiTopic {
    pub endpoint: &'static str,
    pub folder: &'static str,
    pub group: TopicGroup,
}

const fn topic(endpoint: &'static str, folder: &'static str, group: TopicGroup) -> SwiftUiTopic {
    SwiftUiTopic { endpoint, folder, group }
}

use TopicGroup::*;

pub const SWIFTUI_TOPICS: &[SwiftUiTopic] = &[
    topic("App-organization", "app_organization", AppStructure),
    topic("Scenes", "scenes", AppStructure),
    topic("Windows", "windows", AppStructure),
    topic("Immersive-spaces", "immersive_spaces", AppStructure),
    topic("Documents", "documents", AppStructure),
    topic("Navigation", "navigation", AppStructure),
    topic("Modal-presentations", "modal_presentations", AppStructure),
    topic("Toolbars", "toolbars", AppStructure),
    topic("Search", "search", AppStructure),
    topic("App-extensions", "app_extensions", AppStructure),
    topic("Model-data", "model_data", DataAndStorage),
    topic("Environment-values", "environment_values", DataAndStorage),
    topic("Preferences", "preferences", DataAndStorage),
    topic("Persistent-storage", "persistent_storage", DataAndStorage),
    topic("View-fundamentals", "view_fundamentals", Views),
    topic("View-configuration", "view_configuration", Views),
    topic("View-styles", "view_styles", Views),
    topic("Animations", "animations", Views),
    topic("Text-input-and-output", "text_input_and_output", Views),
    topic("Images", "images", Views),
    topic("Controls-and-indicators", "controls_and_indicators", Views),
    topic("Menus-and-commands", "menus_and_commands", Views),
    topic("Shapes", "shapes", Views),
    topic("Drawing-and-graphics", "drawing_and_graphics", Views),
    topic("Layout-fundamentals", "layout_fundamentals", ViewLayout),
    topic("Layout-adjustments", "layout_adjustments", ViewLayout),
    topic("Custom-layout", "custom_layout", ViewLayout),
    topic("Lists", "lists", ViewLayout),
    topic("Tables", "tables", ViewLayout),
    topic("View-groupings", "view_groupings", ViewLayout),
    topic("Scroll-views", "scroll_views", ViewLayout),
    topic("Gestures", "gestures", EventHandling),
    topic("Input-events", "input_events", EventHandling),
    topic("Clipboard", "clipboard", EventHandling),
    topic("Drag-and-drop", "drag_and_drop", EventHandling),
    topic("Focus", "focus", EventHandling),
    topic("System-events", "system_events", EventHandling),
    topic("Accessibility-fundamentals", "accessibility_fundamentals", Accessibility),
    topic("Accessible-appearance", "accessible_appearance", Accessibility),
    topic("Accessible-controls", "accessible_controls", Accessibility),
    topic("Accessible-descriptions", "accessible_descriptions", Accessibility),
    topic("Accessible-navigation", "accessible_navigation", Accessibility),
    topic("AppKit-integration", "appkit_integration", FrameworkIntegration),
    topic("UIKit-integration", "uikit_integration", FrameworkIntegration),
    topic("WatchKit-integration", "watchkit_integration", FrameworkIntegration),
    topic("Technology-specific-views", "technology_specific_views", FrameworkIntegration),
    topic("Previews-in-Xcode", "previews_in_xcode", ToolSupport),
    topic("Xcode-library-customization", "xcode_library_customization", ToolSupport),
    topic("Performance-analysis", "performance_analysis", ToolSupport),
];

/// (endpoint under the Swift docs, folder)
const SWIFT_TOPICS: &[(&str, &str)] = &[
    ("AdoptingSwift6", "adopting_swift_6"),
    ("Int", "int"),
    ("Double", "double"),
    ("String", "string"),
    ("Array", "array"),
    ("Dictionary", "dictionary"),
    ("swift-standard-library", "swift_standard_library"),
    ("choosing-between-structures-and-classes", "data_modeling_structs_classes"),
    ("adopting-common-protocols", "adopting_common_protocols"),
    ("maintaining-state-in-your-apps", "maintaining_state"),
    ("preventing-timing-problems-when-using-closures", "preventing_timing_problems"),
    ("objective-c-and-c-code-customization", "c_and_objc_customization"),
    ("migrating-your-objective-c-code-to-swift", "migrating_objc_to_swift"),
    ("cocoa-design-patterns", "cocoa_design_patterns"),
    ("handling-dynamically-typed-methods-and-objects-in-swift", "handling_dynamic_types"),
    ("using-objective-c-runtime-features-in-swift", "objc_runtime_features"),
    ("imported-c-and-objective-c-apis", "imported_apis"),
    ("calling-objective-c-apis-asynchronously", "async_objc_apis"),
    ("MixingLanguagesInAnXcodeProject", "mixing_languages_cpp"),
    ("CallingAPIsAcrossLanguageBoundaries", "calling_apis_across_boundaries_cpp"),
];

/// Frameworks listed alongside the Swift docs; each page is the framework root.
/// (framework, folder)
const SWIFT_SIBLING_FRAMEWORKS: &[(&str, &str)] = &[
    ("Observation", "observation"),
    ("Distributed", "distributed_actors"),
    ("RegexBuilder", "regex_builder"),
    ("Synchronization", "synchronization"),
];

/// framework → [(slug, folder, platform)]
const PLATFORM_TOPICS: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "UIKit",
        &[
            ("app-and-environment", "app_and_environment", "ios"),
            ("views-and-controls", "views_and_controls", "ios"),
            ("view-controllers", "view_controllers", "ios"),
            ("view-layout", "view_layout", "ios"),
            ("touches-presses-and-gestures", "gestures", "ios"),
            ("menus-and-shortcuts", "menus", "ios"),
            ("accessibility-for-uikit", "accessibility", "ios"),
        ],
    ),
    (
        "AppKit",
        &[
            ("app-and-environment", "app_and_environment", "macos"),
            ("views-and-controls", "views_and_controls", "macos"),
            ("view-management", "view_management", "macos"),
            ("view-layout", "view_layout", "macos"),
            ("mouse-keyboard-and-trackpad", "interaction", "macos"),
            ("menus-cursors-and-the-dock", "menus", "macos"),
            ("accessibility-for-appkit", "accessibility", "macos"),
        ],
    ),
    (
        "WatchKit",
        &[
            ("setting-up-a-watchos-project", "project_setup", "watchos"),
            ("WKApplication", "app_lifecycle", "watchos"),
            ("background-execution", "background_tasks", "watchos"),
            ("life-cycles", "runtime_lifecycle", "watchos"),
            ("storyboard-support", "user_interface", "watchos"),
        ],
    ),
    (
        "visionOS",
        &[
            ("creating-your-first-visionos-app", "app_construction", "visionos"),
            ("adding-3d-content-to-your-app", "spatial_content", "visionos"),
            ("creating-fully-immersive-experiences", "immersive_spaces", "visionos"),
            ("positioning-and-sizing-windows", "window_management", "visionos"),
            ("improving-accessibility-support-in-your-app", "accessibility", "visionos"),
        ],
    ),
    ("PencilKit", &[("PencilKit", "pencilkit", "ipados")]),
];

/// (skill name, page path relative to the documentation base)
const INTELLIGENCE_TOPICS: &[(&str, &str)] = &[
    ("foundation_models", "foundationmodels"),
    ("app_intents", "appintents"),
    ("image_playground", "imageplayground"),
    ("writing_tools", "uikit/uiwritingtoolscoordinator"),
    ("genmoji", "appkit/nsadaptiveimageglyph"),
];

const FRONTEND_SKILLS: &[(&str, &str)] = &[
    ("color_theory_and_palettes", "Mastering color relationships, avoiding generic colors, utilizing HSL, and creating harmonious, modern palettes that evoke a premium feel."),
    ("typography_schema", "Using modern fonts (Inter, Roboto, Outfit), establishing clear hierarchy, and ensuring perfect readability and contrast."),
    ("spacing_and_grids", "Implementing consistent spacing tokens (4pt/8pt grid systems) to create breathing room and structured layouts."),
    ("glassmorphism_and_depth", "Creating stunning translucent layers using backdrop-filter, subtle borders, and layered shadows for a 3D feel."),
    ("dark_mode_implementation", "Designing sleek, low-strain dark themes using deep grays/blues rather than pure black, and adjusting text/border contrasts accordingly."),
    ("fluid_typography", "Using clamp() and viewport units to create text that scales perfectly across device sizes without media query breakpoints."),
    ("css_grid_mastery", "Structuring complex 2D layouts gracefully, utilizing fraction units (fr), minmax(), and auto-fit/auto-fill for responsive grids."),
    ("flexbox_mastery", "Mastering 1D alignment, distribution of space, wrapping, and precise centering of elements."),
    ("micro_interactions", "Adding subtle, performant hover, focus, and active state animations to make the UI feel alive and responsive."),
    ("scroll_animations", "Implementing scroll-linked animations, fading elements in view, and parallax effects using modern CSS/JS APIs."),
    ("performance_optimization", "Ensuring fast load times, minimizing layout shifts (CLS), and utilizing hardware acceleration for animations."),
    ("responsive_design_patterns", "Moving beyond generic breakpoints to design modular, adaptable components that reflow naturally."),
    ("accessibility_and_focus", "Creating beautiful, visible focus rings, ensuring semantic HTML, and meeting WCAG contrast guidelines without sacrificing aesthetics."),
    ("state_driven_styling", "Styling components visually based on varying states (loading, error, success, empty) smoothly and clearly."),
    ("component_reusability", "Building UI pieces that isolate their own styling and accept variants (primary, secondary, outlined) easily."),
    ("svg_animations", "Breathing life into vector graphics, icons, and illustrations using CSS and lightweight JS libraries."),
    ("interactive_forms", "Designing forms that feel engaging, with floating labels, real-time validation feedback, and clear input states."),
    ("loading_states_and_skeletons", "Using shimmer effects and skeleton screens to provide perceived performance while data fetches."),
    ("3d_transforms", "Adding perspective, rotation, and translation to flat elements to create immersive card flips and dynamic depth."),
    ("modern_css_features", "Leveraging CSS variables, logical properties, :has(), and container queries to write advanced, maintainable styles."),
];

/// How a fetched (or static) page is turned into a SKILL.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    SwiftUi {
        endpoint: &'static str,
        group: TopicGroup,
    },
    Swift {
        framework: &'static str,
        endpoint: &'static str,
    },
    Platform {
        framework: &'static str,
        endpoint: &'static str,
        platform: &'static str,
    },
    Intelligence {
        name: &'static str,
    },
    Frontend {
        id: &'static str,
        description: &'static str,
    },
}

/// One SKILL.md to produce. `url` is `None` for skills that need no fetch.
#[derive(Debug, Clone)]
pub struct SkillJob {
    pub url: Option<String>,
    /// Output directory, relative to the output root.
    pub dir: PathBuf,
    pub template: Template,
}

pub fn swiftui_jobs(base_url: &str) -> Vec<SkillJob> {
    SWIFTUI_TOPICS
        .iter()
        .map(|t| SkillJob {
            url: Some(doc_url(base_url, "SwiftUI", t.endpoint)),
            dir: PathBuf::from(t.folder),
            template: Template::SwiftUi {
                endpoint: t.endpoint,
                group: t.group,
            },
        })
        .collect()
}

pub fn swift_jobs(base_url: &str) -> Vec<SkillJob> {
    let topics = SWIFT_TOPICS
        .iter()
        .map(|&(endpoint, folder)| ("Swift", endpoint, folder));
    let siblings = SWIFT_SIBLING_FRAMEWORKS
        .iter()
        .map(|&(framework, folder)| (framework, framework, folder));

    topics
        .chain(siblings)
        .map(|(framework, endpoint, folder)| SkillJob {
            url: Some(doc_url(base_url, framework, endpoint)),
            dir: PathBuf::from(SWIFT_ROOT).join(folder),
            template: Template::Swift { framework, endpoint },
        })
        .collect()
}

pub fn platform_jobs(base_url: &str) -> Vec<SkillJob> {
    PLATFORM_TOPICS
        .iter()
        .flat_map(|&(framework, topics)| {
            topics.iter().map(move |&(endpoint, folder, platform)| SkillJob {
                url: Some(doc_url(base_url, framework, endpoint)),
                dir: PathBuf::from(PLATFORM_ROOT).join(platform).join(folder),
                template: Template::Platform {
                    framework,
                    endpoint,
                    platform,
                },
            })
        })
        .collect()
}

pub fn intelligence_jobs(base_url: &str) -> Vec<SkillJob> {
    INTELLIGENCE_TOPICS
        .iter()
        .map(|&(name, path)| SkillJob {
            url: Some(format!("{}/{}.md", base_url.trim_end_matches('/'), path)),
            dir: PathBuf::from(INTELLIGENCE_ROOT).join(name),
            template: Template::Intelligence { name },
        })
        .collect()
}

pub fn frontend_jobs() -> Vec<SkillJob> {
    FRONTEND_SKILLS
        .iter()
        .map(|&(id, description)| SkillJob {
            url: None,
            dir: PathBuf::from(FRONTEND_ROOT).join(id),
            template: Template::Frontend { id, description },
        })
        .collect()
}

/// Directories (relative to the output root) the verifier walks.
pub fn verification_roots() -> Vec<PathBuf> {
    SWIFTUI_TOPICS
        .iter()
        .map(|t| PathBuf::from(t.folder))
        .chain([FRONTEND_ROOT, INTELLIGENCE_ROOT, PLATFORM_ROOT].map(PathBuf::from))
        .collect()
}
