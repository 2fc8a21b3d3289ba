use crate::types::*;
use serde::{Deserialize, Serialize};

/// Represents a VAST document (Video Ad Serving Template)
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Vast {
    /// The VAST version, "4.2" for documents built by this crate
    pub version: String,

    /// The XML namespace declared on the root element
    pub xmlns: Option<String>,

    /// The Ad elements within the VAST document
    pub ads: Vec<Ad>,

    /// Document level error tracking URLs
    pub errors: Vec<String>,
}

impl Vast {
    /// Creates an empty VAST 4.2 document in the canonical namespace.
    pub fn new() -> Self {
        Vast {
            version: VAST_VERSION.to_string(),
            xmlns: Some(VAST_NAMESPACE.to_string()),
            ads: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl Default for Vast {
    fn default() -> Self {
        Vast::new()
    }
}

/// Represents an Ad within a VAST document
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Ad {
    /// The ad ID
    pub id: Option<String>,

    /// The ad sequence number (for ad pods)
    pub sequence: Option<u32>,

    /// The conditional ad flag
    pub conditional_ad: Option<NumericBool>,

    /// The kind of content the ad carries
    pub ad_type: Option<AdType>,

    /// The in-line or wrapper definition, if any
    pub body: Option<AdBody>,
}

impl Ad {
    pub fn inline(&self) -> Option<&InLine> {
        match &self.body {
            Some(AdBody::InLine(inline)) => Some(inline),
            _ => None,
        }
    }

    pub fn wrapper(&self) -> Option<&Wrapper> {
        match &self.body {
            Some(AdBody::Wrapper(wrapper)) => Some(wrapper),
            _ => None,
        }
    }
}

/// The two mutually exclusive ad definitions
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub enum AdBody {
    InLine(InLine),
    Wrapper(Wrapper),
}

/// Fields shared by InLine and Wrapper ads
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct AdDefinitionBase {
    /// The ad system name and version
    pub ad_system: AdSystem,

    /// Error tracking URLs
    pub errors: Vec<String>,

    /// Extensions
    pub extensions: Option<Extensions>,

    /// Impression tracking URLs
    pub impressions: Vec<Impression>,

    /// Pricing information
    pub pricing: Option<Pricing>,

    /// Viewability tracking URLs
    pub viewable_impression: Option<ViewableImpression>,
}

/// Represents an InLine ad, which contains all the media files and tracking information
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct InLine {
    pub base: AdDefinitionBase,

    /// Identifier of this ad serving event
    pub ad_serving_id: String,

    /// The ad title
    pub ad_title: String,

    pub ad_verifications: Option<AdVerifications>,

    /// The advertiser name
    pub advertiser: Option<String>,

    pub categories: Vec<Category>,

    /// Creative elements; always written, even when empty
    pub creatives: InLineCreatives,

    /// The description of the ad
    pub description: Option<String>,

    /// Seconds the ad may be cached for
    pub expires: Option<u32>,

    pub survey: Option<Survey>,
}

/// Represents a Wrapper ad, which references another VAST document
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Wrapper {
    pub base: AdDefinitionBase,

    pub ad_verifications: Option<AdVerifications>,

    pub blocked_ad_categories: Vec<BlockedAdCategories>,

    /// Creative elements carrying wrapper level tracking
    pub creatives: Option<WrapperCreatives>,

    /// The URL of the next VAST document
    pub vast_ad_tag_uri: String,

    pub follow_additional_wrappers: Option<NumericBool>,

    pub allow_multiple_ads: Option<NumericBool>,

    pub fallback_on_no_ad: Option<NumericBool>,
}

/// Represents the ad system information
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct AdSystem {
    /// The ad system name
    pub value: String,

    /// The ad system version
    pub version: Option<String>,
}

/// Represents an impression tracking URL
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Impression {
    /// The impression tracking URL
    pub value: String,

    /// The impression ID
    pub id: Option<String>,
}

/// Represents pricing information
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Pricing {
    /// The price value
    pub value: Decimal,

    /// The pricing model (e.g., "CPM", "CPC", etc.)
    pub model: Model,

    /// The pricing currency (e.g., "USD", "EUR", etc.)
    pub currency: Currency,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct ViewableImpression {
    pub id: Option<String>,
    pub viewable: Vec<String>,
    pub not_viewable: Vec<String>,
    pub view_undetermined: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Extensions {
    pub extensions: Vec<Extension>,
}

/// Represents an extension
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Extension {
    /// The extension type
    pub r#type: Option<String>,

    /// The inner markup of the extension, kept verbatim
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct AdVerifications {
    pub verifications: Vec<Verification>,
}

/// Represents an ad verification vendor and its resources
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Verification {
    pub vendor: Option<String>,
    pub executable_resources: Vec<ExecutableResource>,
    pub javascript_resources: Vec<JavaScriptResource>,
    pub tracking_events: Option<TrackingEvents>,
    pub verification_parameters: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct ExecutableResource {
    pub value: String,
    pub api_framework: Option<String>,
    pub r#type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct JavaScriptResource {
    pub value: String,
    pub api_framework: Option<String>,
    pub browser_optional: Option<NumericBool>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Category {
    pub value: String,
    pub authority: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct BlockedAdCategories {
    pub value: String,
    pub authority: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Survey {
    pub value: String,
    pub r#type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct InLineCreatives {
    pub creatives: Vec<InLineCreative>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct WrapperCreatives {
    pub creatives: Vec<WrapperCreative>,
}

/// Attributes shared by InLine and Wrapper creatives
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct CreativeBase {
    /// The creative sequence number
    pub sequence: Option<u32>,

    /// The creative API framework
    pub api_framework: Option<String>,

    /// The creative ad ID
    pub ad_id: Option<String>,
}

/// Represents a creative element of an InLine ad
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct InLineCreative {
    pub base: CreativeBase,

    /// The creative ID
    pub id: Option<String>,

    pub creative_extensions: Option<CreativeExtensions>,

    /// Linear, NonLinearAds or CompanionAds payload
    pub content: Option<InLineCreativeContent>,

    pub universal_ad_ids: Vec<UniversalAdId>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub enum InLineCreativeContent {
    Linear(LinearInLine),
    NonLinearAds(NonLinearAds),
    CompanionAds(CompanionAds),
}

/// Represents a creative element of a Wrapper ad
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct WrapperCreative {
    pub base: CreativeBase,

    /// The creative ID
    pub id: Option<String>,

    /// Linear, NonLinearAds or CompanionAds payload
    pub content: Option<WrapperCreativeContent>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub enum WrapperCreativeContent {
    Linear(LinearWrapper),
    NonLinearAds(NonLinearAds),
    CompanionAds(CompanionAds),
}

/// A creative identifier in a shared registry (e.g. Ad-ID)
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct UniversalAdId {
    pub value: String,
    pub id_registry: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct CreativeExtensions {
    pub creative_extensions: Vec<CreativeExtension>,
}

/// Represents a creative extension
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct CreativeExtension {
    pub r#type: Option<String>,

    /// Child nodes of the extension, each one serialized verbatim
    pub items: Vec<String>,
}

/// Fields shared by InLine and Wrapper linear ads
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct LinearBase {
    pub icons: Option<Icons>,

    /// Tracking events
    pub tracking_events: Option<TrackingEvents>,

    pub skip_offset: Option<SkipOffset>,
}

/// Represents a linear ad
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct LinearInLine {
    pub base: LinearBase,

    pub ad_parameters: Option<AdParameters>,

    /// The duration of the ad
    pub duration: Duration,

    /// Media files
    pub media_files: MediaFiles,

    /// Video clicks
    pub video_clicks: Option<VideoClicks>,
}

/// Represents the linear part of a wrapper creative
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct LinearWrapper {
    pub base: LinearBase,

    /// Video clicks
    pub video_clicks: Option<VideoClicks>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct AdParameters {
    pub value: String,
    pub xml_encoded: Option<NumericBool>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct MediaFiles {
    pub closed_caption_files: Option<ClosedCaptionFiles>,
    pub media_files: Vec<MediaFile>,
    pub mezzanines: Vec<Mezzanine>,
    pub interactive_creative_files: Vec<InteractiveCreativeFile>,
}

/// Represents a media file
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct MediaFile {
    /// The media file URL
    pub value: String,

    pub id: Option<String>,

    /// The media file delivery type (progressive or streaming)
    pub delivery: Delivery,

    /// The media file MIME type
    pub r#type: String,

    pub width: u32,

    pub height: u32,

    pub codec: Option<String>,

    /// Average bitrate in Kbps
    pub bitrate: Option<u32>,

    pub min_bitrate: Option<u32>,

    pub max_bitrate: Option<u32>,

    pub scalable: Option<NumericBool>,

    pub maintain_aspect_ratio: Option<NumericBool>,

    /// File size in bytes
    pub file_size: Option<u64>,

    pub media_type: Option<String>,

    pub api_framework: Option<String>,
}

/// A high quality source file for transcoding
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Mezzanine {
    pub value: String,
    pub delivery: Delivery,
    pub r#type: String,
    pub width: u32,
    pub height: u32,
    pub codec: Option<String>,
    pub file_size: Option<u64>,
    pub media_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct InteractiveCreativeFile {
    pub value: String,
    pub r#type: Option<String>,
    pub api_framework: Option<String>,
    pub variable_duration: Option<NumericBool>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct ClosedCaptionFiles {
    pub closed_caption_files: Vec<ClosedCaptionFile>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct ClosedCaptionFile {
    pub value: String,
    pub r#type: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct TrackingEvents {
    pub trackings: Vec<Tracking>,
}

/// Represents a tracking event
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Tracking {
    /// The tracking URL
    pub value: String,

    /// The event type (e.g., "start", "firstQuartile", "complete", etc.)
    pub event: Event,

    /// When the event fires, for "progress" events
    pub offset: Option<Offset>,
}

/// Represents video click-through and click-tracking URLs
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct VideoClicks {
    /// Click tracking URLs
    pub click_tracking: Vec<ClickTracking>,

    /// The click-through URL
    pub click_through: Option<ClickThrough>,

    /// Custom click URLs
    pub custom_click: Vec<ClickTracking>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct ClickThrough {
    pub value: String,
    pub id: Option<String>,
}

/// A click tracking URL with an optional identifier
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct ClickTracking {
    pub value: String,
    pub id: Option<String>,
}

/// Resource variants shared by icons, non-linear ads and companions
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct CreativeResource {
    pub html_resources: Vec<String>,
    pub iframe_resources: Vec<String>,
    pub static_resources: Vec<StaticResource>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct StaticResource {
    pub value: String,
    pub creative_type: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Icons {
    pub icons: Vec<Icon>,
}

/// Represents an industry icon (e.g. AdChoices) shown over a linear ad
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Icon {
    pub resource: CreativeResource,
    pub icon_clicks: Option<IconClicks>,
    pub icon_view_tracking: Vec<String>,
    pub program: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub x_position: Option<XPosition>,
    pub y_position: Option<YPosition>,
    pub duration: Option<Duration>,
    pub offset: Option<Offset>,
    pub api_framework: Option<String>,
    pub pxratio: Option<Decimal>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct IconClicks {
    pub icon_click_fallback_images: Option<IconClickFallbackImages>,
    pub icon_click_through: Option<String>,
    pub icon_click_tracking: Vec<ClickTracking>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct IconClickFallbackImages {
    pub images: Vec<IconClickFallbackImage>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct IconClickFallbackImage {
    pub alt_text: Option<String>,
    pub static_resource: Option<String>,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// Represents non-linear ads
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct NonLinearAds {
    pub tracking_events: Option<TrackingEvents>,

    /// The non-linear ads
    pub non_linears: Vec<NonLinear>,
}

/// Represents a non-linear ad
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct NonLinear {
    /// The non-linear ID
    pub id: Option<String>,

    pub resource: CreativeResource,

    pub ad_parameters: Option<AdParameters>,

    /// The non-linear click-through URL
    pub non_linear_click_through: Option<String>,

    pub non_linear_click_tracking: Vec<ClickTracking>,

    /// The non-linear width
    pub width: u32,

    /// The non-linear height
    pub height: u32,

    pub expanded_width: Option<u32>,

    pub expanded_height: Option<u32>,

    pub scalable: Option<NumericBool>,

    pub maintain_aspect_ratio: Option<NumericBool>,

    pub min_suggested_duration: Option<Duration>,

    pub api_framework: Option<String>,
}

/// Represents companion ads
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct CompanionAds {
    /// Which companions the player must show
    pub required: Option<Required>,

    /// The companion ads
    pub companions: Vec<Companion>,
}

/// Represents a companion ad
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Companion {
    /// The companion ID
    pub id: Option<String>,

    pub resource: CreativeResource,

    pub ad_parameters: Option<AdParameters>,

    pub alt_text: Option<String>,

    /// The companion click-through URL
    pub companion_click_through: Option<String>,

    pub companion_click_tracking: Vec<ClickTracking>,

    pub creative_extensions: Option<CreativeExtensions>,

    /// Companion tracking events
    pub tracking_events: Option<TrackingEvents>,

    /// The companion width
    pub width: u32,

    /// The companion height
    pub height: u32,

    pub asset_width: Option<u32>,

    pub asset_height: Option<u32>,

    pub expanded_width: Option<u32>,

    pub expanded_height: Option<u32>,

    pub api_framework: Option<String>,

    pub ad_slot_id: Option<String>,

    pub pxratio: Option<Decimal>,

    pub rendering_mode: Option<RenderingMode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_is_vast_4_2() {
        let vast = Vast::new();
        assert_eq!(vast.version, "4.2");
        assert_eq!(vast.xmlns.as_deref(), Some("http://www.iab.com/VAST"));
        assert!(vast.ads.is_empty());
        assert!(vast.errors.is_empty());
        assert_eq!(Vast::default(), vast);
    }

    #[test]
    fn ad_exposes_its_active_variant() {
        let mut ad = Ad::default();
        assert!(ad.inline().is_none());
        assert!(ad.wrapper().is_none());

        ad.body = Some(AdBody::Wrapper(Wrapper {
            vast_ad_tag_uri: "https://example.com/vast.xml".to_string(),
            ..Default::default()
        }));
        assert!(ad.inline().is_none());
        assert_eq!(
            ad.wrapper().map(|w| w.vast_ad_tag_uri.as_str()),
            Some("https://example.com/vast.xml")
        );
    }
}
