mod common;

use common::{TestResult, read_fixture};
use std::error::Error as _;
use std::io::{self, Read};
use vast_codec::{
    Ad, AdBody, DecodeError, Event, InLineCreativeContent, Model, NumericBool, Vast, VastError,
    WrapperCreativeContent,
};

#[test]
fn new_document_has_canonical_defaults() {
    let vast = Vast::new();
    assert_eq!(vast.version, "4.2");
    assert_eq!(vast.xmlns.as_deref(), Some("http://www.iab.com/VAST"));
    assert!(vast.ads.is_empty());
    assert!(vast.errors.is_empty());
    assert_eq!(vast, Vast::default());
}

#[test]
fn new_document_serializes_exactly() -> TestResult {
    let bytes = Vast::new().to_bytes()?;
    assert_eq!(
        bytes,
        b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<VAST version=\"4.2\" xmlns=\"http://www.iab.com/VAST\"></VAST>"
    );
    Ok(())
}

#[test]
fn numeric_bool_writes_digits() {
    assert_eq!(NumericBool(false).to_string(), "0");
    assert_eq!(NumericBool(true).to_string(), "1");
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("error"))
    }
}

#[test]
fn read_failure_is_reported_as_read_error() {
    let err = vast_codec::read(FailingReader).unwrap_err();
    assert!(matches!(err, VastError::Read(_)));
    assert_eq!(err.to_string(), "cannot read VAST");

    let source = err.source().expect("read error keeps its cause");
    assert_eq!(source.to_string(), "error");
}

#[test]
fn malformed_xml_is_a_decode_error() {
    let err = vast_codec::parse_vast("<VAST version=\"4.2\"><Ad>").unwrap_err();
    assert!(matches!(err, VastError::Decode(DecodeError::UnclosedElement(_))));
    assert_eq!(err.to_string(), "cannot decode VAST");
    assert!(err.source().is_some());
}

#[test]
fn reads_fixture_through_a_reader() -> TestResult {
    let bytes = read_fixture("inline_simple.xml");
    let vast = vast_codec::read(bytes.as_slice())?;

    assert_eq!(vast.version, "4.2");
    assert_eq!(vast.ads.len(), 1);

    let inline = vast.ads[0].inline().expect("inline ad");
    assert_eq!(inline.base.ad_system.value, "iabtechlab");
    let pricing = inline.base.pricing.as_ref().expect("pricing");
    assert_eq!(pricing.value.as_str(), "25.00");
    assert_eq!(pricing.model, Model::Other("cpm".to_string()));
    assert_eq!(pricing.currency.as_str(), "USD");

    let creative = &inline.creatives.creatives[0];
    let Some(InLineCreativeContent::Linear(linear)) = &creative.content else {
        panic!("expected a linear creative");
    };
    let events: Vec<&Event> = linear
        .base
        .tracking_events
        .iter()
        .flat_map(|events| &events.trackings)
        .map(|tracking| &tracking.event)
        .collect();
    assert_eq!(
        events,
        vec![
            &Event::Start,
            &Event::FirstQuartile,
            &Event::Midpoint,
            &Event::ThirdQuartile,
            &Event::Complete
        ]
    );
    assert_eq!(linear.media_files.media_files.len(), 2);
    assert_eq!(linear.media_files.media_files[0].scalable, Some(NumericBool(true)));
    Ok(())
}

#[test]
fn wrapper_fixture_exposes_each_creative_kind() -> TestResult {
    let vast = vast_codec::from_slice(&read_fixture("wrapper.xml"))?;
    let wrapper = vast.ads[0].wrapper().expect("wrapper ad");

    assert_eq!(wrapper.vast_ad_tag_uri, "https://example.com/vast/inline.xml");
    assert_eq!(wrapper.allow_multiple_ads, Some(NumericBool(true)));
    assert_eq!(wrapper.blocked_ad_categories.len(), 2);
    assert_eq!(wrapper.blocked_ad_categories[1].authority, None);

    let creatives = &wrapper.creatives.as_ref().expect("creatives").creatives;
    assert!(matches!(creatives[0].content, Some(WrapperCreativeContent::Linear(_))));
    assert!(matches!(creatives[1].content, Some(WrapperCreativeContent::CompanionAds(_))));
    assert!(matches!(creatives[2].content, Some(WrapperCreativeContent::NonLinearAds(_))));
    Ok(())
}

#[test]
fn extension_markup_is_opaque() -> TestResult {
    let vast = vast_codec::from_slice(&read_fixture("creative_extensions.xml"))?;
    let inline = vast.ads[0].inline().expect("inline ad");

    let extensions = &inline.base.extensions.as_ref().expect("extensions").extensions;
    assert_eq!(extensions[1].r#type.as_deref(), Some("waterfall"));
    assert_eq!(
        extensions[1].content,
        r#"<Vendor:Data xmlns:Vendor="urn:vendor" priority="high">a &amp; b</Vendor:Data><!-- vendor payload -->"#
    );

    let creative_extensions = &inline.creatives.creatives[0]
        .creative_extensions
        .as_ref()
        .expect("creative extensions")
        .creative_extensions;
    assert_eq!(creative_extensions[0].items.len(), 2);
    assert_eq!(
        creative_extensions[0].items[0],
        r#"<Placement width="640" height="360"></Placement>"#
    );
    assert_eq!(creative_extensions[1].items, vec!["plain payload"]);

    let xml = vast.to_xml_string()?;
    assert!(xml.contains(
        r#"<Extension type="waterfall"><Vendor:Data xmlns:Vendor="urn:vendor" priority="high">a &amp; b</Vendor:Data><!-- vendor payload --></Extension>"#
    ));
    Ok(())
}

#[test]
fn ad_without_body_round_trips_as_empty_element() -> TestResult {
    let mut vast = Vast::new();
    vast.ads.push(Ad {
        id: Some("empty".to_string()),
        ..Ad::default()
    });

    let xml = vast.to_xml_string()?;
    assert!(xml.contains("<Ad id=\"empty\"></Ad>"));

    let decoded = vast_codec::parse_vast(&xml)?;
    assert_eq!(decoded, vast);
    assert!(decoded.ads[0].body.is_none());
    Ok(())
}

#[test]
fn built_model_round_trips_unchanged() -> TestResult {
    let vast = vast_codec::from_slice(&read_fixture("inline_linear.xml"))?;
    let decoded = vast_codec::from_slice(&vast.to_bytes()?)?;
    assert_eq!(decoded, vast);

    let inline = match &decoded.ads[0].body {
        Some(AdBody::InLine(inline)) => inline,
        other => panic!("unexpected body: {other:?}"),
    };
    assert_eq!(inline.expires, Some(86400));
    Ok(())
}

#[test]
fn model_serializes_to_json() -> TestResult {
    let vast = vast_codec::from_slice(&read_fixture("ad_pod.xml"))?;
    let json = serde_json::to_value(&vast)?;

    assert_eq!(json["version"], "4.2");
    assert_eq!(json["ads"][0]["ad_type"], "audio");
    assert_eq!(json["errors"][0], "https://example.com/no-ad?code=[ERRORCODE]");

    let back: Vast = serde_json::from_value(json)?;
    assert_eq!(back, vast);
    Ok(())
}

#[tokio::test]
async fn async_api_matches_sync_api() -> TestResult {
    let bytes = read_fixture("viewable_impression.xml");
    let from_async = vast_codec::async_api::from_slice(&bytes).await?;
    let from_sync = vast_codec::from_slice(&bytes)?;
    assert_eq!(from_async, from_sync);

    let xml = vast_codec::async_api::to_xml_string(&from_async).await?;
    assert_eq!(xml, from_sync.to_xml_string()?);
    Ok(())
}

#[test]
fn decimal_text_survives_round_trip() -> TestResult {
    let vast = vast_codec::from_slice(&read_fixture("inline_companion.xml"))?;
    let inline = vast.ads[0].inline().expect("inline ad");
    let Some(InLineCreativeContent::CompanionAds(companion_ads)) =
        &inline.creatives.creatives[1].content
    else {
        panic!("expected companion ads");
    };
    let pxratio = companion_ads.companions[0].pxratio.as_ref().expect("pxratio");
    assert_eq!(pxratio.as_str(), "1.0");
    assert_eq!(pxratio.to_f64(), 1.0);

    let xml = vast.to_xml_string()?;
    assert!(xml.contains(r#"pxratio="1.0""#));

    let simple = vast_codec::from_slice(&read_fixture("inline_simple.xml"))?;
    assert!(simple.to_xml_string()?.contains("<![CDATA[25.00]]></Pricing>"));
    Ok(())
}
