use std::collections::{BTreeSet, HashSet};

use schemars::{JsonSchema, schema_for};
use serde_json::Value;

use super::params::*;
use super::*;

fn schema_of<T: JsonSchema>() -> Value {
    serde_json::to_value(schema_for!(T)).unwrap()
}

fn input_schema(operation: Operation) -> Value {
    match operation {
        Operation::ConvertToMarkdown => schema_of::<ConvertToMarkdownParams>(),
        Operation::ConvertMultipleUrlsToMarkdown => {
            schema_of::<ConvertMultipleUrlsToMarkdownParams>()
        }
        Operation::ExtractData => schema_of::<ExtractDataParams>(),
        Operation::ExtractDataMultiple => schema_of::<ExtractDataMultipleParams>(),
        Operation::ScrapeUrl => schema_of::<ScrapeUrlParams>(),
        Operation::ExtractLinks => schema_of::<ExtractLinksParams>(),
        Operation::SummarizeUrl => schema_of::<SummarizeUrlParams>(),
        Operation::SummarizeWebsite => schema_of::<SummarizeWebsiteParams>(),
        Operation::SummarizeMultipleUrls => schema_of::<SummarizeMultipleUrlsParams>(),
        Operation::GetAiModels => schema_of::<GetAiModelsParams>(),
        Operation::CreateReview => schema_of::<CreateReviewParams>(),
        Operation::GetReview => schema_of::<GetReviewParams>(),
        Operation::ListReviews => schema_of::<ListReviewsParams>(),
        Operation::UpdateReview => schema_of::<UpdateReviewParams>(),
        Operation::DeleteReview => schema_of::<DeleteReviewParams>(),
        Operation::IsUrlAlive => schema_of::<IsUrlAliveParams>(),
        Operation::GetUrlAfterRedirects => schema_of::<GetUrlAfterRedirectsParams>(),
        Operation::SeoKeywordIdeas => schema_of::<SeoKeywordIdeasParams>(),
        Operation::SeoKeywordDifficulty => schema_of::<SeoKeywordDifficultyParams>(),
        Operation::SeoTraffic => schema_of::<SeoTrafficParams>(),
        Operation::SeoBacklinks => schema_of::<SeoBacklinksParams>(),
    }
}

#[test]
fn test_operation_names_are_unique() {
    let names: HashSet<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
    assert_eq!(names.len(), Operation::ALL.len());
}

#[test]
fn test_display_uses_tool_name() {
    assert_eq!(Operation::ConvertToMarkdown.to_string(), "convert_to_markdown");
    assert_eq!(Operation::SeoBacklinks.to_string(), "seo_backlinks");
}

#[test]
fn test_every_operation_accepts_api_key() {
    for op in Operation::ALL {
        let field = op
            .spec()
            .field("api_key")
            .unwrap_or_else(|| panic!("{} has no api_key field", op));
        assert_eq!(field.placement, Placement::Credential);
        assert!(!field.required);
    }
}

#[test]
fn test_path_placeholders_are_required_path_fields() {
    for op in Operation::ALL {
        let spec = op.spec();
        for segment in spec.path.split('/') {
            if let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                let field = spec
                    .field(name)
                    .unwrap_or_else(|| panic!("{} has no field for {{{}}}", op, name));
                assert_eq!(field.placement, Placement::Path, "{}", op);
                assert!(field.required, "{}", op);
            }
        }
        for field in spec.fields.iter().filter(|f| f.placement == Placement::Path) {
            assert!(
                spec.path.contains(&format!("{{{}}}", field.name)),
                "{} declares path field {} missing from template",
                op,
                field.name
            );
        }
    }
}

#[test]
fn test_primary_field_exists() {
    for op in Operation::ALL {
        if let Some(primary) = op.spec().primary {
            assert!(op.spec().field(primary).is_some(), "{}", op);
        }
    }
}

#[test]
fn test_only_body_methods_place_fields_in_body() {
    for op in Operation::ALL {
        let spec = op.spec();
        if !spec.method.sends_body() {
            assert!(
                spec.fields
                    .iter()
                    .all(|f| !matches!(f.placement, Placement::Body | Placement::Options)),
                "{} is {} but places fields in the body",
                op,
                spec.method
            );
        }
    }
}

#[test]
fn test_url_placement_matches_remote_contract() {
    let in_query = [
        Operation::ScrapeUrl,
        Operation::ExtractLinks,
        Operation::IsUrlAlive,
        Operation::GetUrlAfterRedirects,
    ];
    let in_body = [
        Operation::ConvertToMarkdown,
        Operation::ExtractData,
        Operation::SummarizeUrl,
        Operation::SummarizeWebsite,
        Operation::CreateReview,
    ];

    for op in in_query {
        assert_eq!(op.spec().field("url").unwrap().placement, Placement::Query);
    }
    for op in in_body {
        assert_eq!(op.spec().field("url").unwrap().placement, Placement::Body);
    }
}

#[test]
fn test_typed_params_match_descriptor_table() {
    for op in Operation::ALL {
        let schema = input_schema(op);

        let properties: BTreeSet<String> = schema["properties"]
            .as_object()
            .map(|props| props.keys().cloned().collect())
            .unwrap_or_default();
        let fields: BTreeSet<String> = op
            .spec()
            .fields
            .iter()
            .map(|f| f.name.to_string())
            .collect();
        assert_eq!(properties, fields, "property names differ for {}", op);

        let required: BTreeSet<String> = schema["required"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();
        let required_fields: BTreeSet<String> = op
            .spec()
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.to_string())
            .collect();
        assert_eq!(required, required_fields, "required set differs for {}", op);
    }
}

#[test]
fn test_choice_values_match_enums() {
    let link_types = [LinkType::Web, LinkType::Image, LinkType::File, LinkType::All];
    for value in link_types {
        let wire = serde_json::to_value(value).unwrap();
        assert!(LinkType::VALUES.contains(&wire.as_str().unwrap()));
    }
    for value in [SummaryFormat::Bullet, SummaryFormat::Paragraph] {
        let wire = serde_json::to_value(value).unwrap();
        assert!(SummaryFormat::VALUES.contains(&wire.as_str().unwrap()));
    }
    for value in [TrafficMode::Subdomains, TrafficMode::Exact] {
        let wire = serde_json::to_value(value).unwrap();
        assert!(TrafficMode::VALUES.contains(&wire.as_str().unwrap()));
    }
}

#[test]
fn test_to_arguments_omits_unset_flags() {
    let params = ConvertToMarkdownParams {
        url: "https://example.com".to_string(),
        model: None,
        delay_after_load: Some(500),
        debug: false,
        api_key: None,
    };

    let args = to_arguments(&params).unwrap();

    assert_eq!(args["url"], "https://example.com");
    assert_eq!(args["delayAfterLoad"], 500);
    assert!(!args.contains_key("debug"));
    assert!(args.get("model").is_none_or(Value::is_null));
}

#[test]
fn test_target_renders_primary_argument() {
    let args: JsonObject = serde_json::from_value(serde_json::json!({
        "urls": ["https://a.test", "https://b.test"]
    }))
    .unwrap();

    assert_eq!(
        Operation::ExtractDataMultiple.spec().target(&args),
        Some("https://a.test, https://b.test".to_string())
    );
    assert_eq!(Operation::GetAiModels.spec().target(&args), None);
}
