use std::sync::LazyLock;
use strum_macros::{Display, EnumIter};
use vitrine::framework::router::{RouteTable, RouteTableBuilder};

/// The closed set of views. `NotFound` is the wildcard fallback and has no
/// declared path of its own.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum View {
    Home,
    MoodGenerator,
    SpatialCart,
    CameraPortal,
    MeasurementTools,
    MySpaces,
    Catalog,
    NotFound,
}

impl View {
    pub fn path(self) -> Option<&'static str> {
        match self {
            View::Home => Some("/"),
            View::MoodGenerator => Some("/ai-design-studio-mood-generator"),
            View::SpatialCart => Some("/ar-shopping-experience-spatial-cart"),
            View::CameraPortal => Some("/ar-camera-portal-homepage"),
            View::MeasurementTools => Some("/ar-measurement-planning-tools"),
            View::MySpaces => Some("/my-spaces-project-management"),
            View::Catalog => Some("/smart-catalog-furniture-universe"),
            View::NotFound => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Roomscape",
            View::MoodGenerator => "AI Design Studio",
            View::SpatialCart => "Spatial Cart",
            View::CameraPortal => "AR Camera Portal",
            View::MeasurementTools => "Measurement & Planning",
            View::MySpaces => "My Spaces",
            View::Catalog => "Furniture Universe",
            View::NotFound => "Page Not Found",
        }
    }
}

/// Declared once at startup, immutable thereafter. Resolution over the
/// entries is first-match-wins; everything else falls through to
/// [`View::NotFound`].
pub fn route_table() -> RouteTable<View> {
    RouteTableBuilder::new()
        .route("/", View::Home)
        .route("/ai-design-studio-mood-generator", View::MoodGenerator)
        .route("/ar-shopping-experience-spatial-cart", View::SpatialCart)
        .route("/ar-camera-portal-homepage", View::CameraPortal)
        .route("/ar-measurement-planning-tools", View::MeasurementTools)
        .route("/my-spaces-project-management", View::MySpaces)
        .route("/smart-catalog-furniture-universe", View::Catalog)
        .fallback(View::NotFound)
}

pub static ROUTES: LazyLock<RouteTable<View>> = LazyLock::new(route_table);
