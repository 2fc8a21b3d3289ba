//! Encoding of the document model into XML.
//!
//! Each `*_to_element` function lists the children of its element in schema
//! order. Optional values that are unset and empty lists produce nothing,
//! except where the schema requires the element (`Creatives` in `InLine`).

use crate::error::{EncodeError, Result};
use crate::models::*;
use crate::xml::{self, Element};
use log::debug;

impl Vast {
    /// Serialize the document as indented XML preceded by an XML declaration.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let bytes = xml::to_document_bytes(&vast_to_element(self))?;
        debug!("encoded VAST document with {} ads into {} bytes", self.ads.len(), bytes.len());
        Ok(bytes)
    }

    /// Same as [`Vast::to_bytes`], as a `String`.
    pub fn to_xml_string(&self) -> Result<String> {
        let bytes = self.to_bytes()?;
        Ok(String::from_utf8(bytes).map_err(EncodeError::from)?)
    }
}

fn text_element(name: &str, value: &str) -> Element {
    let mut element = Element::new(name);
    element.push_text(value);
    element
}

fn cdata_element(name: &str, value: &str) -> Element {
    let mut element = Element::new(name);
    element.push_cdata(value);
    element
}

/// Convert a Vast struct to its root element
pub fn vast_to_element(vast: &Vast) -> Element {
    let mut element = Element::new("VAST")
        .with_attribute("version", &vast.version)
        .with_optional_attribute("xmlns", vast.xmlns.as_ref());

    for ad in &vast.ads {
        element.push_element(ad_to_element(ad));
    }
    for error in &vast.errors {
        element.push_element(cdata_element("Error", error));
    }

    element
}

/// Convert an Ad to XML
fn ad_to_element(ad: &Ad) -> Element {
    let mut element = Element::new("Ad")
        .with_optional_attribute("id", ad.id.as_ref())
        .with_optional_attribute("sequence", ad.sequence.as_ref())
        .with_optional_attribute("conditionalAd", ad.conditional_ad.as_ref())
        .with_optional_attribute("adType", ad.ad_type.as_ref());

    match &ad.body {
        Some(AdBody::InLine(inline)) => element.push_element(inline_to_element(inline)),
        Some(AdBody::Wrapper(wrapper)) => element.push_element(wrapper_to_element(wrapper)),
        None => (),
    }

    element
}

fn push_ad_definition_base(element: &mut Element, base: &AdDefinitionBase) {
    element.push_element(
        text_element("AdSystem", &base.ad_system.value)
            .with_optional_attribute("version", base.ad_system.version.as_ref()),
    );

    for error in &base.errors {
        element.push_element(cdata_element("Error", error));
    }

    if let Some(extensions) = &base.extensions {
        element.push_element(extensions_to_element(extensions));
    }

    for impression in &base.impressions {
        element.push_element(
            cdata_element("Impression", &impression.value)
                .with_optional_attribute("id", impression.id.as_ref()),
        );
    }

    if let Some(pricing) = &base.pricing {
        element.push_element(
            cdata_element("Pricing", pricing.value.as_str())
                .with_attribute("model", &pricing.model)
                .with_attribute("currency", &pricing.currency),
        );
    }

    if let Some(viewable_impression) = &base.viewable_impression {
        element.push_element(viewable_impression_to_element(viewable_impression));
    }
}

/// Convert an InLine to XML
fn inline_to_element(inline: &InLine) -> Element {
    let mut element = Element::new("InLine");
    push_ad_definition_base(&mut element, &inline.base);

    element.push_element(text_element("AdServingId", &inline.ad_serving_id));
    element.push_element(text_element("AdTitle", &inline.ad_title));

    if let Some(ad_verifications) = &inline.ad_verifications {
        element.push_element(ad_verifications_to_element(ad_verifications));
    }

    if let Some(advertiser) = &inline.advertiser {
        element.push_element(text_element("Advertiser", advertiser));
    }

    for category in &inline.categories {
        element.push_element(
            text_element("Category", &category.value)
                .with_attribute("authority", &category.authority),
        );
    }

    let mut creatives = Element::new("Creatives");
    for creative in &inline.creatives.creatives {
        creatives.push_element(inline_creative_to_element(creative));
    }
    element.push_element(creatives);

    if let Some(description) = &inline.description {
        element.push_element(cdata_element("Description", description));
    }

    if let Some(expires) = &inline.expires {
        element.push_element(text_element("Expires", &expires.to_string()));
    }

    if let Some(survey) = &inline.survey {
        element.push_element(
            text_element("Survey", &survey.value)
                .with_optional_attribute("type", survey.r#type.as_ref()),
        );
    }

    element
}

/// Convert a Wrapper to XML
fn wrapper_to_element(wrapper: &Wrapper) -> Element {
    let mut element = Element::new("Wrapper")
        .with_optional_attribute(
            "followAdditionalWrappers",
            wrapper.follow_additional_wrappers.as_ref(),
        )
        .with_optional_attribute("allowMultipleAds", wrapper.allow_multiple_ads.as_ref())
        .with_optional_attribute("fallbackOnNoAd", wrapper.fallback_on_no_ad.as_ref());
    push_ad_definition_base(&mut element, &wrapper.base);

    if let Some(ad_verifications) = &wrapper.ad_verifications {
        element.push_element(ad_verifications_to_element(ad_verifications));
    }

    for blocked in &wrapper.blocked_ad_categories {
        element.push_element(
            text_element("BlockedAdCategories", &blocked.value)
                .with_optional_attribute("authority", blocked.authority.as_ref()),
        );
    }

    if let Some(creatives) = &wrapper.creatives {
        let mut creatives_element = Element::new("Creatives");
        for creative in &creatives.creatives {
            creatives_element.push_element(wrapper_creative_to_element(creative));
        }
        element.push_element(creatives_element);
    }

    element.push_element(cdata_element("VASTAdTagURI", &wrapper.vast_ad_tag_uri));

    element
}

fn viewable_impression_to_element(viewable_impression: &ViewableImpression) -> Element {
    let mut element = Element::new("ViewableImpression")
        .with_optional_attribute("id", viewable_impression.id.as_ref());

    for url in &viewable_impression.viewable {
        element.push_element(cdata_element("Viewable", url));
    }
    for url in &viewable_impression.not_viewable {
        element.push_element(cdata_element("NotViewable", url));
    }
    for url in &viewable_impression.view_undetermined {
        element.push_element(cdata_element("ViewUndetermined", url));
    }

    element
}

fn extensions_to_element(extensions: &Extensions) -> Element {
    let mut element = Element::new("Extensions");

    for extension in &extensions.extensions {
        let mut extension_element =
            Element::new("Extension").with_optional_attribute("type", extension.r#type.as_ref());
        extension_element.push_raw(&extension.content);
        element.push_element(extension_element);
    }

    element
}

fn ad_verifications_to_element(ad_verifications: &AdVerifications) -> Element {
    let mut element = Element::new("AdVerifications");

    for verification in &ad_verifications.verifications {
        let mut verification_element = Element::new("Verification")
            .with_optional_attribute("vendor", verification.vendor.as_ref());

        for resource in &verification.executable_resources {
            verification_element.push_element(
                cdata_element("ExecutableResource", &resource.value)
                    .with_optional_attribute("apiFramework", resource.api_framework.as_ref())
                    .with_optional_attribute("type", resource.r#type.as_ref()),
            );
        }

        for resource in &verification.javascript_resources {
            verification_element.push_element(
                cdata_element("JavaScriptResource", &resource.value)
                    .with_optional_attribute("apiFramework", resource.api_framework.as_ref())
                    .with_optional_attribute("browserOptional", resource.browser_optional.as_ref()),
            );
        }

        if let Some(tracking_events) = &verification.tracking_events {
            verification_element.push_element(tracking_events_to_element(tracking_events));
        }

        if let Some(parameters) = &verification.verification_parameters {
            verification_element.push_element(text_element("VerificationParameters", parameters));
        }

        element.push_element(verification_element);
    }

    element
}

fn creative_element(base: &CreativeBase, id: Option<&String>) -> Element {
    Element::new("Creative")
        .with_optional_attribute("sequence", base.sequence.as_ref())
        .with_optional_attribute("apiFramework", base.api_framework.as_ref())
        .with_optional_attribute("adId", base.ad_id.as_ref())
        .with_optional_attribute("id", id)
}

/// Convert an InLine Creative to XML
fn inline_creative_to_element(creative: &InLineCreative) -> Element {
    let mut element = creative_element(&creative.base, creative.id.as_ref());

    if let Some(InLineCreativeContent::CompanionAds(companion_ads)) = &creative.content {
        element.push_element(companion_ads_to_element(companion_ads));
    }

    if let Some(creative_extensions) = &creative.creative_extensions {
        element.push_element(creative_extensions_to_element(creative_extensions));
    }

    match &creative.content {
        Some(InLineCreativeContent::Linear(linear)) => {
            element.push_element(linear_inline_to_element(linear))
        }
        Some(InLineCreativeContent::NonLinearAds(non_linear_ads)) => {
            element.push_element(non_linear_ads_to_element(non_linear_ads))
        }
        _ => (),
    }

    for universal_ad_id in &creative.universal_ad_ids {
        element.push_element(
            text_element("UniversalAdId", &universal_ad_id.value)
                .with_attribute("idRegistry", &universal_ad_id.id_registry),
        );
    }

    element
}

/// Convert a Wrapper Creative to XML
fn wrapper_creative_to_element(creative: &WrapperCreative) -> Element {
    let mut element = creative_element(&creative.base, creative.id.as_ref());

    match &creative.content {
        Some(WrapperCreativeContent::CompanionAds(companion_ads)) => {
            element.push_element(companion_ads_to_element(companion_ads))
        }
        Some(WrapperCreativeContent::Linear(linear)) => {
            element.push_element(linear_wrapper_to_element(linear))
        }
        Some(WrapperCreativeContent::NonLinearAds(non_linear_ads)) => {
            element.push_element(non_linear_ads_to_element(non_linear_ads))
        }
        None => (),
    }

    element
}

fn creative_extensions_to_element(creative_extensions: &CreativeExtensions) -> Element {
    let mut element = Element::new("CreativeExtensions");

    for extension in &creative_extensions.creative_extensions {
        let mut extension_element = Element::new("CreativeExtension")
            .with_optional_attribute("type", extension.r#type.as_ref());
        for item in &extension.items {
            extension_element.push_raw(item);
        }
        element.push_element(extension_element);
    }

    element
}

fn linear_element(base: &LinearBase) -> Element {
    let mut element =
        Element::new("Linear").with_optional_attribute("skipoffset", base.skip_offset.as_ref());

    if let Some(icons) = &base.icons {
        element.push_element(icons_to_element(icons));
    }

    if let Some(tracking_events) = &base.tracking_events {
        element.push_element(tracking_events_to_element(tracking_events));
    }

    element
}

/// Convert a Linear of an InLine creative to XML
fn linear_inline_to_element(linear: &LinearInLine) -> Element {
    let mut element = linear_element(&linear.base);

    if let Some(ad_parameters) = &linear.ad_parameters {
        element.push_element(ad_parameters_to_element(ad_parameters));
    }

    element.push_element(text_element("Duration", linear.duration.as_str()));
    element.push_element(media_files_to_element(&linear.media_files));

    if let Some(video_clicks) = &linear.video_clicks {
        element.push_element(video_clicks_to_element(video_clicks));
    }

    element
}

/// Convert a Linear of a Wrapper creative to XML
fn linear_wrapper_to_element(linear: &LinearWrapper) -> Element {
    let mut element = linear_element(&linear.base);

    if let Some(video_clicks) = &linear.video_clicks {
        element.push_element(video_clicks_to_element(video_clicks));
    }

    element
}

fn ad_parameters_to_element(ad_parameters: &AdParameters) -> Element {
    text_element("AdParameters", &ad_parameters.value)
        .with_optional_attribute("xmlEncoded", ad_parameters.xml_encoded.as_ref())
}

fn media_files_to_element(media_files: &MediaFiles) -> Element {
    let mut element = Element::new("MediaFiles");

    if let Some(closed_caption_files) = &media_files.closed_caption_files {
        let mut files_element = Element::new("ClosedCaptionFiles");
        for file in &closed_caption_files.closed_caption_files {
            files_element.push_element(
                cdata_element("ClosedCaptionFile", &file.value)
                    .with_optional_attribute("type", file.r#type.as_ref())
                    .with_optional_attribute("language", file.language.as_ref()),
            );
        }
        element.push_element(files_element);
    }

    for media_file in &media_files.media_files {
        element.push_element(media_file_to_element(media_file));
    }

    for mezzanine in &media_files.mezzanines {
        element.push_element(
            cdata_element("Mezzanine", &mezzanine.value)
                .with_attribute("delivery", &mezzanine.delivery)
                .with_attribute("type", &mezzanine.r#type)
                .with_attribute("width", mezzanine.width)
                .with_attribute("height", mezzanine.height)
                .with_optional_attribute("codec", mezzanine.codec.as_ref())
                .with_optional_attribute("fileSize", mezzanine.file_size.as_ref())
                .with_optional_attribute("mediaType", mezzanine.media_type.as_ref()),
        );
    }

    for file in &media_files.interactive_creative_files {
        element.push_element(
            cdata_element("InteractiveCreativeFile", &file.value)
                .with_optional_attribute("type", file.r#type.as_ref())
                .with_optional_attribute("apiFramework", file.api_framework.as_ref())
                .with_optional_attribute("variableDuration", file.variable_duration.as_ref()),
        );
    }

    element
}

fn media_file_to_element(media_file: &MediaFile) -> Element {
    cdata_element("MediaFile", &media_file.value)
        .with_optional_attribute("id", media_file.id.as_ref())
        .with_attribute("delivery", &media_file.delivery)
        .with_attribute("type", &media_file.r#type)
        .with_attribute("width", media_file.width)
        .with_attribute("height", media_file.height)
        .with_optional_attribute("codec", media_file.codec.as_ref())
        .with_optional_attribute("bitrate", media_file.bitrate.as_ref())
        .with_optional_attribute("minBitrate", media_file.min_bitrate.as_ref())
        .with_optional_attribute("maxBitrate", media_file.max_bitrate.as_ref())
        .with_optional_attribute("scalable", media_file.scalable.as_ref())
        .with_optional_attribute("maintainAspectRatio", media_file.maintain_aspect_ratio.as_ref())
        .with_optional_attribute("fileSize", media_file.file_size.as_ref())
        .with_optional_attribute("mediaType", media_file.media_type.as_ref())
        .with_optional_attribute("apiFramework", media_file.api_framework.as_ref())
}

fn tracking_events_to_element(tracking_events: &TrackingEvents) -> Element {
    let mut element = Element::new("TrackingEvents");

    for tracking in &tracking_events.trackings {
        element.push_element(
            cdata_element("Tracking", &tracking.value)
                .with_attribute("event", &tracking.event)
                .with_optional_attribute("offset", tracking.offset.as_ref()),
        );
    }

    element
}

fn click_tracking_element(name: &str, click: &ClickTracking, cdata: bool) -> Element {
    let element = if cdata {
        cdata_element(name, &click.value)
    } else {
        text_element(name, &click.value)
    };
    element.with_optional_attribute("id", click.id.as_ref())
}

fn video_clicks_to_element(video_clicks: &VideoClicks) -> Element {
    let mut element = Element::new("VideoClicks");

    for click in &video_clicks.click_tracking {
        element.push_element(click_tracking_element("ClickTracking", click, true));
    }

    if let Some(click_through) = &video_clicks.click_through {
        element.push_element(
            cdata_element("ClickThrough", &click_through.value)
                .with_optional_attribute("id", click_through.id.as_ref()),
        );
    }

    for click in &video_clicks.custom_click {
        element.push_element(click_tracking_element("CustomClick", click, false));
    }

    element
}

fn push_creative_resource(element: &mut Element, resource: &CreativeResource) {
    for html in &resource.html_resources {
        element.push_element(cdata_element("HTMLResource", html));
    }
    for iframe in &resource.iframe_resources {
        element.push_element(cdata_element("IFrameResource", iframe));
    }
    for static_resource in &resource.static_resources {
        element.push_element(
            cdata_element("StaticResource", &static_resource.value)
                .with_attribute("creativeType", &static_resource.creative_type),
        );
    }
}

fn icons_to_element(icons: &Icons) -> Element {
    let mut element = Element::new("Icons");
    for icon in &icons.icons {
        element.push_element(icon_to_element(icon));
    }
    element
}

fn icon_to_element(icon: &Icon) -> Element {
    let mut element = Element::new("Icon")
        .with_optional_attribute("program", icon.program.as_ref())
        .with_optional_attribute("width", icon.width.as_ref())
        .with_optional_attribute("height", icon.height.as_ref())
        .with_optional_attribute("xPosition", icon.x_position.as_ref())
        .with_optional_attribute("yPosition", icon.y_position.as_ref())
        .with_optional_attribute("duration", icon.duration.as_ref())
        .with_optional_attribute("offset", icon.offset.as_ref())
        .with_optional_attribute("apiFramework", icon.api_framework.as_ref())
        .with_optional_attribute("pxratio", icon.pxratio.as_ref());
    push_creative_resource(&mut element, &icon.resource);

    if let Some(icon_clicks) = &icon.icon_clicks {
        element.push_element(icon_clicks_to_element(icon_clicks));
    }

    for url in &icon.icon_view_tracking {
        element.push_element(text_element("IconViewTracking", url));
    }

    element
}

fn icon_clicks_to_element(icon_clicks: &IconClicks) -> Element {
    let mut element = Element::new("IconClicks");

    if let Some(fallback_images) = &icon_clicks.icon_click_fallback_images {
        let mut images_element = Element::new("IconClickFallbackImages");
        for image in &fallback_images.images {
            let mut image_element = Element::new("IconClickFallbackImage")
                .with_optional_attribute("height", image.height.as_ref())
                .with_optional_attribute("width", image.width.as_ref());
            if let Some(alt_text) = &image.alt_text {
                image_element.push_element(text_element("AltText", alt_text));
            }
            if let Some(static_resource) = &image.static_resource {
                image_element.push_element(cdata_element("StaticResource", static_resource));
            }
            images_element.push_element(image_element);
        }
        element.push_element(images_element);
    }

    if let Some(click_through) = &icon_clicks.icon_click_through {
        element.push_element(text_element("IconClickThrough", click_through));
    }

    for click in &icon_clicks.icon_click_tracking {
        element.push_element(click_tracking_element("IconClickTracking", click, false));
    }

    element
}

/// Convert a NonLinearAds to XML
fn non_linear_ads_to_element(non_linear_ads: &NonLinearAds) -> Element {
    let mut element = Element::new("NonLinearAds");

    if let Some(tracking_events) = &non_linear_ads.tracking_events {
        element.push_element(tracking_events_to_element(tracking_events));
    }

    for non_linear in &non_linear_ads.non_linears {
        element.push_element(non_linear_to_element(non_linear));
    }

    element
}

fn non_linear_to_element(non_linear: &NonLinear) -> Element {
    let mut element = Element::new("NonLinear")
        .with_optional_attribute("id", non_linear.id.as_ref())
        .with_attribute("width", non_linear.width)
        .with_attribute("height", non_linear.height)
        .with_optional_attribute("expandedWidth", non_linear.expanded_width.as_ref())
        .with_optional_attribute("expandedHeight", non_linear.expanded_height.as_ref())
        .with_optional_attribute("scalable", non_linear.scalable.as_ref())
        .with_optional_attribute("maintainAspectRatio", non_linear.maintain_aspect_ratio.as_ref())
        .with_optional_attribute("minSuggestedDuration", non_linear.min_suggested_duration.as_ref())
        .with_optional_attribute("apiFramework", non_linear.api_framework.as_ref());
    push_creative_resource(&mut element, &non_linear.resource);

    if let Some(ad_parameters) = &non_linear.ad_parameters {
        element.push_element(ad_parameters_to_element(ad_parameters));
    }

    if let Some(click_through) = &non_linear.non_linear_click_through {
        element.push_element(cdata_element("NonLinearClickThrough", click_through));
    }

    for click in &non_linear.non_linear_click_tracking {
        element.push_element(click_tracking_element("NonLinearClickTracking", click, true));
    }

    element
}

/// Convert a CompanionAds to XML
fn companion_ads_to_element(companion_ads: &CompanionAds) -> Element {
    let mut element = Element::new("CompanionAds")
        .with_optional_attribute("required", companion_ads.required.as_ref());

    for companion in &companion_ads.companions {
        element.push_element(companion_to_element(companion));
    }

    element
}

fn companion_to_element(companion: &Companion) -> Element {
    let mut element = Element::new("Companion")
        .with_optional_attribute("id", companion.id.as_ref())
        .with_attribute("width", companion.width)
        .with_attribute("height", companion.height)
        .with_optional_attribute("assetWidth", companion.asset_width.as_ref())
        .with_optional_attribute("assetHeight", companion.asset_height.as_ref())
        .with_optional_attribute("expandedWidth", companion.expanded_width.as_ref())
        .with_optional_attribute("expandedHeight", companion.expanded_height.as_ref())
        .with_optional_attribute("apiFramework", companion.api_framework.as_ref())
        .with_optional_attribute("adSlotId", companion.ad_slot_id.as_ref())
        .with_optional_attribute("pxratio", companion.pxratio.as_ref())
        .with_optional_attribute("renderingMode", companion.rendering_mode.as_ref());
    push_creative_resource(&mut element, &companion.resource);

    if let Some(ad_parameters) = &companion.ad_parameters {
        element.push_element(ad_parameters_to_element(ad_parameters));
    }

    if let Some(alt_text) = &companion.alt_text {
        element.push_element(text_element("AltText", alt_text));
    }

    if let Some(click_through) = &companion.companion_click_through {
        element.push_element(cdata_element("CompanionClickThrough", click_through));
    }

    for click in &companion.companion_click_tracking {
        element.push_element(click_tracking_element("CompanionClickTracking", click, false));
    }

    if let Some(creative_extensions) = &companion.creative_extensions {
        element.push_element(creative_extensions_to_element(creative_extensions));
    }

    if let Some(tracking_events) = &companion.tracking_events {
        element.push_element(tracking_events_to_element(tracking_events));
    }

    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;

    const HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

    #[test]
    fn empty_document_matches_canonical_form() {
        let xml = Vast::new().to_xml_string().unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<VAST version=\"4.2\" xmlns=\"http://www.iab.com/VAST\"></VAST>"
        );
    }

    #[test]
    fn ad_without_body_is_an_empty_element() {
        let mut vast = Vast::new();
        vast.xmlns = None;
        vast.ads.push(Ad {
            id: Some("degenerate".to_string()),
            ..Ad::default()
        });

        let xml = vast.to_xml_string().unwrap();
        assert_eq!(
            xml,
            format!("{HEADER}<VAST version=\"4.2\">\n  <Ad id=\"degenerate\"></Ad>\n</VAST>")
        );
    }

    #[test]
    fn inline_elements_follow_schema_order() {
        let inline = InLine {
            base: AdDefinitionBase {
                ad_system: AdSystem {
                    value: "iabtechlab".to_string(),
                    version: None,
                },
                impressions: vec![Impression {
                    value: "https://example.com/i".to_string(),
                    id: None,
                }],
                pricing: Some(Pricing {
                    value: "25.50".parse().unwrap(),
                    model: Model::Cpm,
                    currency: Currency::from("USD"),
                }),
                ..AdDefinitionBase::default()
            },
            ad_serving_id: "serving".to_string(),
            ad_title: "Title & more".to_string(),
            expires: Some(3600),
            ..InLine::default()
        };
        let mut vast = Vast::new();
        vast.ads.push(Ad {
            conditional_ad: Some(NumericBool(true)),
            body: Some(AdBody::InLine(inline)),
            ..Ad::default()
        });

        let xml = vast.to_xml_string().unwrap();
        let expected = format!(
            "{HEADER}<VAST version=\"4.2\" xmlns=\"http://www.iab.com/VAST\">
  <Ad conditionalAd=\"1\">
    <InLine>
      <AdSystem>iabtechlab</AdSystem>
      <Impression><![CDATA[https://example.com/i]]></Impression>
      <Pricing model=\"CPM\" currency=\"USD\"><![CDATA[25.50]]></Pricing>
      <AdServingId>serving</AdServingId>
      <AdTitle>Title &amp; more</AdTitle>
      <Creatives></Creatives>
      <Expires>3600</Expires>
    </InLine>
  </Ad>
</VAST>"
        );
        assert_eq!(xml, expected);
    }

    #[test]
    fn wrapper_omits_unset_creatives() {
        let wrapper = Wrapper {
            vast_ad_tag_uri: "https://example.com/next.xml".to_string(),
            fallback_on_no_ad: Some(NumericBool(false)),
            ..Wrapper::default()
        };
        let element = wrapper_to_element(&wrapper);

        assert_eq!(element.attribute("fallbackOnNoAd"), Some("0"));
        assert_eq!(element.attribute("followAdditionalWrappers"), None);
        let names: Vec<&str> = element.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["AdSystem", "VASTAdTagURI"]);
    }

    #[test]
    fn creative_payload_is_placed_by_schema_order() {
        let creative = InLineCreative {
            creative_extensions: Some(CreativeExtensions::default()),
            content: Some(InLineCreativeContent::CompanionAds(CompanionAds::default())),
            universal_ad_ids: vec![UniversalAdId {
                value: "8465".to_string(),
                id_registry: "Ad-ID".to_string(),
            }],
            ..InLineCreative::default()
        };
        let element = inline_creative_to_element(&creative);
        let names: Vec<&str> = element.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["CompanionAds", "CreativeExtensions", "UniversalAdId"]);
    }
}
