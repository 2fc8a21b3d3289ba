use crate::error::{DecodeError, Result, VastError};
use crate::models::*;
use crate::types::*;
use crate::xml::{self, Element};
use log::{debug, trace, warn};
use std::fmt::Display;
use std::io::Read;
use std::str::FromStr;

type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Read a whole VAST document from `reader` and decode it.
///
/// The reader is consumed and dropped after a single full read.
pub fn read<R: Read>(mut reader: R) -> Result<Vast> {
    let mut body = Vec::new();
    reader.read_to_end(&mut body).map_err(VastError::Read)?;
    drop(reader);

    from_slice(&body)
}

/// Parse a VAST XML string into a Vast struct
pub fn parse_vast(xml: &str) -> Result<Vast> {
    from_slice(xml.as_bytes())
}

/// Decode a VAST document held in memory
pub fn from_slice(bytes: &[u8]) -> Result<Vast> {
    let root = xml::parse(bytes)?;
    let vast = parse_vast_element(&root)?;

    debug!(
        "decoded VAST {} document: {} bytes, {} ads",
        vast.version,
        bytes.len(),
        vast.ads.len()
    );

    Ok(vast)
}

fn skip_element(parent: &Element, name: &str) {
    trace!("skipping unknown element <{}> in <{}>", name, parent.name);
}

fn invalid_value(element: &Element, field: &str, value: &str, reason: impl Display) -> DecodeError {
    DecodeError::InvalidValue {
        element: element.name.clone(),
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn attr_string(element: &Element, name: &str) -> Option<String> {
    element.attribute(name).map(str::to_string)
}

/// A required attribute; an absent one reads as the empty string.
fn required_attr_string(element: &Element, name: &str) -> String {
    element.attribute(name).unwrap_or_default().to_string()
}

fn attr_from<T: for<'a> From<&'a str>>(element: &Element, name: &str) -> Option<T> {
    element.attribute(name).map(T::from)
}

fn attr_parsed<T>(element: &Element, name: &str) -> DecodeResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match element.attribute(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| invalid_value(element, name, raw, e)),
        None => Ok(None),
    }
}

/// A required numeric attribute; an absent one reads as zero.
fn required_attr_parsed<T>(element: &Element, name: &str) -> DecodeResult<T>
where
    T: FromStr + Default,
    T::Err: Display,
{
    Ok(attr_parsed(element, name)?.unwrap_or_default())
}

fn text_parsed<T>(element: &Element) -> DecodeResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = element.text();
    raw.trim()
        .parse::<T>()
        .map_err(|e| invalid_value(element, "content", &raw, e))
}

/// Store the first value seen for a slot that only holds one; later ones are dropped.
fn set_once<T>(slot: &mut Option<T>, value: T, parent: &Element, name: &str) {
    if slot.is_some() {
        warn!(
            "<{}> already has a payload, ignoring additional <{}>",
            parent.name, name
        );
        return;
    }
    *slot = Some(value);
}

/// Parse the VAST root element
fn parse_vast_element(element: &Element) -> DecodeResult<Vast> {
    if element.name != "VAST" {
        return Err(DecodeError::UnexpectedRoot(element.name.clone()));
    }

    let version = element
        .attribute("version")
        .ok_or_else(|| DecodeError::MissingAttribute {
            element: element.name.clone(),
            attribute: "version".to_string(),
        })?
        .to_string();

    if version != VAST_VERSION {
        warn!(
            "decoding VAST {} document with the VAST {} model",
            version, VAST_VERSION
        );
    }

    let mut vast = Vast {
        version,
        xmlns: attr_string(element, "xmlns"),
        ads: Vec::new(),
        errors: Vec::new(),
    };

    for child in element.elements() {
        match child.name.as_str() {
            "Ad" => vast.ads.push(parse_ad(child)?),
            "Error" => vast.errors.push(child.text()),
            other => skip_element(element, other),
        }
    }

    Ok(vast)
}

/// Parse a single Ad element
fn parse_ad(element: &Element) -> DecodeResult<Ad> {
    let mut ad = Ad {
        id: attr_string(element, "id"),
        sequence: attr_parsed(element, "sequence")?,
        conditional_ad: attr_parsed(element, "conditionalAd")?,
        ad_type: attr_from(element, "adType"),
        body: None,
    };

    for child in element.elements() {
        match child.name.as_str() {
            "InLine" => {
                let inline = parse_inline(child)?;
                set_once(&mut ad.body, AdBody::InLine(inline), element, &child.name);
            }
            "Wrapper" => {
                let wrapper = parse_wrapper(child)?;
                set_once(&mut ad.body, AdBody::Wrapper(wrapper), element, &child.name);
            }
            other => skip_element(element, other),
        }
    }

    Ok(ad)
}

/// Parse a child shared by InLine and Wrapper; returns false if `child` is not one of them.
fn parse_ad_definition_child(child: &Element, base: &mut AdDefinitionBase) -> DecodeResult<bool> {
    match child.name.as_str() {
        "AdSystem" => base.ad_system = parse_ad_system(child),
        "Error" => base.errors.push(child.text()),
        "Extensions" => base.extensions = Some(parse_extensions(child)?),
        "Impression" => base.impressions.push(parse_impression(child)),
        "Pricing" => base.pricing = Some(parse_pricing(child)?),
        "ViewableImpression" => base.viewable_impression = Some(parse_viewable_impression(child)),
        _ => return Ok(false),
    }
    Ok(true)
}

/// Parse an InLine element
fn parse_inline(element: &Element) -> DecodeResult<InLine> {
    let mut inline = InLine::default();

    for child in element.elements() {
        if parse_ad_definition_child(child, &mut inline.base)? {
            continue;
        }
        match child.name.as_str() {
            "AdServingId" => inline.ad_serving_id = child.text(),
            "AdTitle" => inline.ad_title = child.text(),
            "AdVerifications" => inline.ad_verifications = Some(parse_ad_verifications(child)?),
            "Advertiser" => inline.advertiser = Some(child.text()),
            "Category" => inline.categories.push(Category {
                value: child.text(),
                authority: required_attr_string(child, "authority"),
            }),
            "Creatives" => inline.creatives = parse_inline_creatives(child)?,
            "Description" => inline.description = Some(child.text()),
            "Expires" => inline.expires = Some(text_parsed(child)?),
            "Survey" => {
                inline.survey = Some(Survey {
                    value: child.text(),
                    r#type: attr_string(child, "type"),
                })
            }
            other => skip_element(element, other),
        }
    }

    Ok(inline)
}

/// Parse a Wrapper element
fn parse_wrapper(element: &Element) -> DecodeResult<Wrapper> {
    let mut wrapper = Wrapper {
        follow_additional_wrappers: attr_parsed(element, "followAdditionalWrappers")?,
        allow_multiple_ads: attr_parsed(element, "allowMultipleAds")?,
        fallback_on_no_ad: attr_parsed(element, "fallbackOnNoAd")?,
        ..Wrapper::default()
    };

    for child in element.elements() {
        if parse_ad_definition_child(child, &mut wrapper.base)? {
            continue;
        }
        match child.name.as_str() {
            "AdVerifications" => wrapper.ad_verifications = Some(parse_ad_verifications(child)?),
            "BlockedAdCategories" => wrapper.blocked_ad_categories.push(BlockedAdCategories {
                value: child.text(),
                authority: attr_string(child, "authority"),
            }),
            "Creatives" => wrapper.creatives = Some(parse_wrapper_creatives(child)?),
            "VASTAdTagURI" => wrapper.vast_ad_tag_uri = child.text(),
            other => skip_element(element, other),
        }
    }

    Ok(wrapper)
}

/// Parse AdSystem element
fn parse_ad_system(element: &Element) -> AdSystem {
    AdSystem {
        value: element.text(),
        version: attr_string(element, "version"),
    }
}

/// Parse Impression element
fn parse_impression(element: &Element) -> Impression {
    Impression {
        value: element.text(),
        id: attr_string(element, "id"),
    }
}

/// Parse Pricing element
fn parse_pricing(element: &Element) -> DecodeResult<Pricing> {
    Ok(Pricing {
        value: text_parsed(element)?,
        model: attr_from(element, "model").unwrap_or_default(),
        currency: attr_from(element, "currency").unwrap_or_default(),
    })
}

fn parse_viewable_impression(element: &Element) -> ViewableImpression {
    let mut viewable_impression = ViewableImpression {
        id: attr_string(element, "id"),
        ..ViewableImpression::default()
    };

    for child in element.elements() {
        match child.name.as_str() {
            "Viewable" => viewable_impression.viewable.push(child.text()),
            "NotViewable" => viewable_impression.not_viewable.push(child.text()),
            "ViewUndetermined" => viewable_impression.view_undetermined.push(child.text()),
            other => skip_element(element, other),
        }
    }

    viewable_impression
}

/// Parse Extensions element
fn parse_extensions(element: &Element) -> DecodeResult<Extensions> {
    let mut extensions = Extensions::default();

    for child in element.elements() {
        match child.name.as_str() {
            "Extension" => extensions.extensions.push(Extension {
                r#type: attr_string(child, "type"),
                content: xml::to_fragment(&child.children)?,
            }),
            other => skip_element(element, other),
        }
    }

    Ok(extensions)
}

fn parse_ad_verifications(element: &Element) -> DecodeResult<AdVerifications> {
    let mut ad_verifications = AdVerifications::default();

    for child in element.elements() {
        match child.name.as_str() {
            "Verification" => ad_verifications.verifications.push(parse_verification(child)?),
            other => skip_element(element, other),
        }
    }

    Ok(ad_verifications)
}

fn parse_verification(element: &Element) -> DecodeResult<Verification> {
    let mut verification = Verification {
        vendor: attr_string(element, "vendor"),
        ..Verification::default()
    };

    for child in element.elements() {
        match child.name.as_str() {
            "ExecutableResource" => verification.executable_resources.push(ExecutableResource {
                value: child.text(),
                api_framework: attr_string(child, "apiFramework"),
                r#type: attr_string(child, "type"),
            }),
            "JavaScriptResource" => verification.javascript_resources.push(JavaScriptResource {
                value: child.text(),
                api_framework: attr_string(child, "apiFramework"),
                browser_optional: attr_parsed(child, "browserOptional")?,
            }),
            "TrackingEvents" => verification.tracking_events = Some(parse_tracking_events(child)),
            "VerificationParameters" => verification.verification_parameters = Some(child.text()),
            other => skip_element(element, other),
        }
    }

    Ok(verification)
}

/// Parse the Creatives element of an InLine ad
fn parse_inline_creatives(element: &Element) -> DecodeResult<InLineCreatives> {
    let mut creatives = InLineCreatives::default();

    for child in element.elements() {
        match child.name.as_str() {
            "Creative" => creatives.creatives.push(parse_inline_creative(child)?),
            other => skip_element(element, other),
        }
    }

    Ok(creatives)
}

/// Parse the Creatives element of a Wrapper ad
fn parse_wrapper_creatives(element: &Element) -> DecodeResult<WrapperCreatives> {
    let mut creatives = WrapperCreatives::default();

    for child in element.elements() {
        match child.name.as_str() {
            "Creative" => creatives.creatives.push(parse_wrapper_creative(child)?),
            other => skip_element(element, other),
        }
    }

    Ok(creatives)
}

fn parse_creative_base(element: &Element) -> DecodeResult<CreativeBase> {
    Ok(CreativeBase {
        sequence: attr_parsed(element, "sequence")?,
        api_framework: attr_string(element, "apiFramework"),
        ad_id: attr_string(element, "adId"),
    })
}

/// Parse Creative element of an InLine ad
fn parse_inline_creative(element: &Element) -> DecodeResult<InLineCreative> {
    let mut creative = InLineCreative {
        base: parse_creative_base(element)?,
        id: attr_string(element, "id"),
        ..InLineCreative::default()
    };

    for child in element.elements() {
        let content = match child.name.as_str() {
            "Linear" => InLineCreativeContent::Linear(parse_linear_inline(child)?),
            "NonLinearAds" => InLineCreativeContent::NonLinearAds(parse_non_linear_ads(child)?),
            "CompanionAds" => InLineCreativeContent::CompanionAds(parse_companion_ads(child)?),
            "CreativeExtensions" => {
                creative.creative_extensions = Some(parse_creative_extensions(child)?);
                continue;
            }
            "UniversalAdId" => {
                creative.universal_ad_ids.push(UniversalAdId {
                    value: child.text(),
                    id_registry: required_attr_string(child, "idRegistry"),
                });
                continue;
            }
            other => {
                skip_element(element, other);
                continue;
            }
        };
        set_once(&mut creative.content, content, element, &child.name);
    }

    Ok(creative)
}

/// Parse Creative element of a Wrapper ad
fn parse_wrapper_creative(element: &Element) -> DecodeResult<WrapperCreative> {
    let mut creative = WrapperCreative {
        base: parse_creative_base(element)?,
        id: attr_string(element, "id"),
        content: None,
    };

    for child in element.elements() {
        let content = match child.name.as_str() {
            "Linear" => WrapperCreativeContent::Linear(parse_linear_wrapper(child)?),
            "NonLinearAds" => WrapperCreativeContent::NonLinearAds(parse_non_linear_ads(child)?),
            "CompanionAds" => WrapperCreativeContent::CompanionAds(parse_companion_ads(child)?),
            other => {
                skip_element(element, other);
                continue;
            }
        };
        set_once(&mut creative.content, content, element, &child.name);
    }

    Ok(creative)
}

/// Parse CreativeExtensions element
fn parse_creative_extensions(element: &Element) -> DecodeResult<CreativeExtensions> {
    let mut creative_extensions = CreativeExtensions::default();

    for child in element.elements() {
        match child.name.as_str() {
            "CreativeExtension" => {
                let items = child
                    .children
                    .iter()
                    .map(|node| xml::to_fragment(std::slice::from_ref(node)))
                    .collect::<quick_xml::Result<Vec<_>>>()?;
                creative_extensions.creative_extensions.push(CreativeExtension {
                    r#type: attr_string(child, "type"),
                    items,
                });
            }
            other => skip_element(element, other),
        }
    }

    Ok(creative_extensions)
}

fn parse_linear_base_child(child: &Element, base: &mut LinearBase) -> DecodeResult<bool> {
    match child.name.as_str() {
        "Icons" => base.icons = Some(parse_icons(child)?),
        "TrackingEvents" => base.tracking_events = Some(parse_tracking_events(child)),
        _ => return Ok(false),
    }
    Ok(true)
}

/// Parse Linear element of an InLine creative
fn parse_linear_inline(element: &Element) -> DecodeResult<LinearInLine> {
    let mut linear = LinearInLine::default();
    linear.base.skip_offset = attr_from(element, "skipoffset");

    for child in element.elements() {
        if parse_linear_base_child(child, &mut linear.base)? {
            continue;
        }
        match child.name.as_str() {
            "AdParameters" => linear.ad_parameters = Some(parse_ad_parameters(child)?),
            "Duration" => linear.duration = Duration::new(child.text()),
            "MediaFiles" => linear.media_files = parse_media_files(child)?,
            "VideoClicks" => linear.video_clicks = Some(parse_video_clicks(child)),
            other => skip_element(element, other),
        }
    }

    Ok(linear)
}

/// Parse Linear element of a Wrapper creative
fn parse_linear_wrapper(element: &Element) -> DecodeResult<LinearWrapper> {
    let mut linear = LinearWrapper::default();
    linear.base.skip_offset = attr_from(element, "skipoffset");

    for child in element.elements() {
        if parse_linear_base_child(child, &mut linear.base)? {
            continue;
        }
        match child.name.as_str() {
            "VideoClicks" => linear.video_clicks = Some(parse_video_clicks(child)),
            other => skip_element(element, other),
        }
    }

    Ok(linear)
}

fn parse_ad_parameters(element: &Element) -> DecodeResult<AdParameters> {
    Ok(AdParameters {
        value: element.text(),
        xml_encoded: attr_parsed(element, "xmlEncoded")?,
    })
}

/// Parse MediaFiles element
fn parse_media_files(element: &Element) -> DecodeResult<MediaFiles> {
    let mut media_files = MediaFiles::default();

    for child in element.elements() {
        match child.name.as_str() {
            "ClosedCaptionFiles" => {
                media_files.closed_caption_files = Some(parse_closed_caption_files(child))
            }
            "MediaFile" => media_files.media_files.push(parse_media_file(child)?),
            "Mezzanine" => media_files.mezzanines.push(parse_mezzanine(child)?),
            "InteractiveCreativeFile" => media_files
                .interactive_creative_files
                .push(InteractiveCreativeFile {
                    value: child.text(),
                    r#type: attr_string(child, "type"),
                    api_framework: attr_string(child, "apiFramework"),
                    variable_duration: attr_parsed(child, "variableDuration")?,
                }),
            other => skip_element(element, other),
        }
    }

    Ok(media_files)
}

/// Parse MediaFile element
fn parse_media_file(element: &Element) -> DecodeResult<MediaFile> {
    Ok(MediaFile {
        value: element.text(),
        id: attr_string(element, "id"),
        delivery: attr_from(element, "delivery").unwrap_or_default(),
        r#type: required_attr_string(element, "type"),
        width: required_attr_parsed(element, "width")?,
        height: required_attr_parsed(element, "height")?,
        codec: attr_string(element, "codec"),
        bitrate: attr_parsed(element, "bitrate")?,
        min_bitrate: attr_parsed(element, "minBitrate")?,
        max_bitrate: attr_parsed(element, "maxBitrate")?,
        scalable: attr_parsed(element, "scalable")?,
        maintain_aspect_ratio: attr_parsed(element, "maintainAspectRatio")?,
        file_size: attr_parsed(element, "fileSize")?,
        media_type: attr_string(element, "mediaType"),
        api_framework: attr_string(element, "apiFramework"),
    })
}

fn parse_mezzanine(element: &Element) -> DecodeResult<Mezzanine> {
    Ok(Mezzanine {
        value: element.text(),
        delivery: attr_from(element, "delivery").unwrap_or_default(),
        r#type: required_attr_string(element, "type"),
        width: required_attr_parsed(element, "width")?,
        height: required_attr_parsed(element, "height")?,
        codec: attr_string(element, "codec"),
        file_size: attr_parsed(element, "fileSize")?,
        media_type: attr_string(element, "mediaType"),
    })
}

fn parse_closed_caption_files(element: &Element) -> ClosedCaptionFiles {
    let mut files = ClosedCaptionFiles::default();

    for child in element.elements() {
        match child.name.as_str() {
            "ClosedCaptionFile" => files.closed_caption_files.push(ClosedCaptionFile {
                value: child.text(),
                r#type: attr_string(child, "type"),
                language: attr_string(child, "language"),
            }),
            other => skip_element(element, other),
        }
    }

    files
}

/// Parse TrackingEvents element
fn parse_tracking_events(element: &Element) -> TrackingEvents {
    let mut tracking_events = TrackingEvents::default();

    for child in element.elements() {
        match child.name.as_str() {
            "Tracking" => tracking_events.trackings.push(Tracking {
                value: child.text(),
                event: attr_from(child, "event").unwrap_or_default(),
                offset: attr_from(child, "offset"),
            }),
            other => skip_element(element, other),
        }
    }

    tracking_events
}

fn parse_click_tracking(element: &Element) -> ClickTracking {
    ClickTracking {
        value: element.text(),
        id: attr_string(element, "id"),
    }
}

/// Parse VideoClicks element
fn parse_video_clicks(element: &Element) -> VideoClicks {
    let mut video_clicks = VideoClicks::default();

    for child in element.elements() {
        match child.name.as_str() {
            "ClickTracking" => video_clicks.click_tracking.push(parse_click_tracking(child)),
            "ClickThrough" => {
                video_clicks.click_through = Some(ClickThrough {
                    value: child.text(),
                    id: attr_string(child, "id"),
                })
            }
            "CustomClick" => video_clicks.custom_click.push(parse_click_tracking(child)),
            other => skip_element(element, other),
        }
    }

    video_clicks
}

/// Parse a resource child shared by icons, non-linear ads and companions.
fn parse_resource_child(child: &Element, resource: &mut CreativeResource) -> bool {
    match child.name.as_str() {
        "HTMLResource" => resource.html_resources.push(child.text()),
        "IFrameResource" => resource.iframe_resources.push(child.text()),
        "StaticResource" => resource.static_resources.push(StaticResource {
            value: child.text(),
            creative_type: required_attr_string(child, "creativeType"),
        }),
        _ => return false,
    }
    true
}

fn parse_icons(element: &Element) -> DecodeResult<Icons> {
    let mut icons = Icons::default();

    for child in element.elements() {
        match child.name.as_str() {
            "Icon" => icons.icons.push(parse_icon(child)?),
            other => skip_element(element, other),
        }
    }

    Ok(icons)
}

fn parse_icon(element: &Element) -> DecodeResult<Icon> {
    let mut icon = Icon {
        program: attr_string(element, "program"),
        width: attr_parsed(element, "width")?,
        height: attr_parsed(element, "height")?,
        x_position: attr_from(element, "xPosition"),
        y_position: attr_from(element, "yPosition"),
        duration: attr_from(element, "duration"),
        offset: attr_from(element, "offset"),
        api_framework: attr_string(element, "apiFramework"),
        pxratio: attr_parsed(element, "pxratio")?,
        ..Icon::default()
    };

    for child in element.elements() {
        if parse_resource_child(child, &mut icon.resource) {
            continue;
        }
        match child.name.as_str() {
            "IconClicks" => icon.icon_clicks = Some(parse_icon_clicks(child)?),
            "IconViewTracking" => icon.icon_view_tracking.push(child.text()),
            other => skip_element(element, other),
        }
    }

    Ok(icon)
}

fn parse_icon_clicks(element: &Element) -> DecodeResult<IconClicks> {
    let mut icon_clicks = IconClicks::default();

    for child in element.elements() {
        match child.name.as_str() {
            "IconClickFallbackImages" => {
                icon_clicks.icon_click_fallback_images =
                    Some(parse_icon_click_fallback_images(child)?)
            }
            "IconClickThrough" => icon_clicks.icon_click_through = Some(child.text()),
            "IconClickTracking" => icon_clicks
                .icon_click_tracking
                .push(parse_click_tracking(child)),
            other => skip_element(element, other),
        }
    }

    Ok(icon_clicks)
}

fn parse_icon_click_fallback_images(element: &Element) -> DecodeResult<IconClickFallbackImages> {
    let mut fallback_images = IconClickFallbackImages::default();

    for child in element.elements() {
        if child.name != "IconClickFallbackImage" {
            skip_element(element, &child.name);
            continue;
        }

        let mut image = IconClickFallbackImage {
            height: attr_parsed(child, "height")?,
            width: attr_parsed(child, "width")?,
            ..IconClickFallbackImage::default()
        };
        for grandchild in child.elements() {
            match grandchild.name.as_str() {
                "AltText" => image.alt_text = Some(grandchild.text()),
                "StaticResource" => image.static_resource = Some(grandchild.text()),
                other => skip_element(child, other),
            }
        }
        fallback_images.images.push(image);
    }

    Ok(fallback_images)
}

/// Parse NonLinearAds element
fn parse_non_linear_ads(element: &Element) -> DecodeResult<NonLinearAds> {
    let mut non_linear_ads = NonLinearAds::default();

    for child in element.elements() {
        match child.name.as_str() {
            "TrackingEvents" => non_linear_ads.tracking_events = Some(parse_tracking_events(child)),
            "NonLinear" => non_linear_ads.non_linears.push(parse_non_linear(child)?),
            other => skip_element(element, other),
        }
    }

    Ok(non_linear_ads)
}

/// Parse NonLinear element
fn parse_non_linear(element: &Element) -> DecodeResult<NonLinear> {
    let mut non_linear = NonLinear {
        id: attr_string(element, "id"),
        width: required_attr_parsed(element, "width")?,
        height: required_attr_parsed(element, "height")?,
        expanded_width: attr_parsed(element, "expandedWidth")?,
        expanded_height: attr_parsed(element, "expandedHeight")?,
        scalable: attr_parsed(element, "scalable")?,
        maintain_aspect_ratio: attr_parsed(element, "maintainAspectRatio")?,
        min_suggested_duration: attr_from(element, "minSuggestedDuration"),
        api_framework: attr_string(element, "apiFramework"),
        ..NonLinear::default()
    };

    for child in element.elements() {
        if parse_resource_child(child, &mut non_linear.resource) {
            continue;
        }
        match child.name.as_str() {
            "AdParameters" => non_linear.ad_parameters = Some(parse_ad_parameters(child)?),
            "NonLinearClickThrough" => non_linear.non_linear_click_through = Some(child.text()),
            "NonLinearClickTracking" => non_linear
                .non_linear_click_tracking
                .push(parse_click_tracking(child)),
            other => skip_element(element, other),
        }
    }

    Ok(non_linear)
}

/// Parse CompanionAds element
fn parse_companion_ads(element: &Element) -> DecodeResult<CompanionAds> {
    let mut companion_ads = CompanionAds {
        required: attr_from(element, "required"),
        companions: Vec::new(),
    };

    for child in element.elements() {
        match child.name.as_str() {
            "Companion" => companion_ads.companions.push(parse_companion(child)?),
            other => skip_element(element, other),
        }
    }

    Ok(companion_ads)
}

/// Parse Companion element
fn parse_companion(element: &Element) -> DecodeResult<Companion> {
    let mut companion = Companion {
        id: attr_string(element, "id"),
        width: required_attr_parsed(element, "width")?,
        height: required_attr_parsed(element, "height")?,
        asset_width: attr_parsed(element, "assetWidth")?,
        asset_height: attr_parsed(element, "assetHeight")?,
        expanded_width: attr_parsed(element, "expandedWidth")?,
        expanded_height: attr_parsed(element, "expandedHeight")?,
        api_framework: attr_string(element, "apiFramework"),
        ad_slot_id: attr_string(element, "adSlotId"),
        pxratio: attr_parsed(element, "pxratio")?,
        rendering_mode: attr_from(element, "renderingMode"),
        ..Companion::default()
    };

    for child in element.elements() {
        if parse_resource_child(child, &mut companion.resource) {
            continue;
        }
        match child.name.as_str() {
            "AdParameters" => companion.ad_parameters = Some(parse_ad_parameters(child)?),
            "AltText" => companion.alt_text = Some(child.text()),
            "CompanionClickThrough" => companion.companion_click_through = Some(child.text()),
            "CompanionClickTracking" => companion
                .companion_click_tracking
                .push(parse_click_tracking(child)),
            "CreativeExtensions" => {
                companion.creative_extensions = Some(parse_creative_extensions(child)?)
            }
            "TrackingEvents" => companion.tracking_events = Some(parse_tracking_events(child)),
            other => skip_element(element, other),
        }
    }

    Ok(companion)
}
