//! Tests for input validation and category parsing

use shared::{
    validate_context, validate_image_count, validate_query, GpsCoordinates, ImageAttachment,
    Language, ProblemCategory, UserContext, MAX_IMAGES,
};

fn context_with_images(count: usize) -> UserContext {
    UserContext {
        region: "Maharashtra".to_string(),
        crop: "Cotton".to_string(),
        area: 1.0,
        soil_type: "Black".to_string(),
        season: "Kharif".to_string(),
        sowing_date: None,
        language: Language::English,
        images: (0..count)
            .map(|_| ImageAttachment {
                mime_type: "image/jpeg".to_string(),
                data_base64: "aGVsbG8=".to_string(),
            })
            .collect(),
    }
}

mod query_validation {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace_queries() {
        assert!(validate_query("").is_err());
        assert!(validate_query("   \n\t").is_err());
    }

    #[test]
    fn accepts_real_queries() {
        assert!(validate_query("My wheat leaves are turning yellow").is_ok());
    }
}

mod context_validation {
    use super::*;

    #[test]
    fn accepts_a_complete_context() {
        assert!(validate_context(&context_with_images(0)).is_ok());
        assert!(validate_context(&context_with_images(MAX_IMAGES)).is_ok());
    }

    #[test]
    fn rejects_missing_crop_or_soil() {
        let mut ctx = context_with_images(0);
        ctx.crop = " ".to_string();
        assert!(validate_context(&ctx).is_err());

        let mut ctx = context_with_images(0);
        ctx.soil_type = String::new();
        assert!(validate_context(&ctx).is_err());
    }

    #[test]
    fn rejects_too_many_images() {
        assert!(validate_context(&context_with_images(MAX_IMAGES + 1)).is_err());
        assert!(validate_image_count(MAX_IMAGES).is_ok());
        assert!(validate_image_count(MAX_IMAGES + 1).is_err());
    }

    #[test]
    fn non_positive_area_is_coerced_not_rejected() {
        let mut ctx = context_with_images(0);
        ctx.area = -2.0;
        assert!(validate_context(&ctx).is_ok());
        assert_eq!(ctx.effective_area(), 1.0);

        ctx.area = 4.5;
        assert_eq!(ctx.effective_area(), 4.5);
    }
}

mod geolocation {
    use super::*;

    #[test]
    fn coordinates_deserialize_from_wire_fields() {
        let gps: GpsCoordinates =
            serde_json::from_str(r#"{"latitude": 30.9, "longitude": 75.85}"#).unwrap();
        assert_eq!(gps, GpsCoordinates::new(30.9, 75.85));
    }

    #[test]
    fn coordinates_reject_missing_fields() {
        assert!(serde_json::from_str::<GpsCoordinates>(r#"{"latitude": 30.9}"#).is_err());
    }
}

mod category_parsing {
    use super::*;

    #[test]
    fn parses_the_closed_label_set() {
        assert_eq!(
            ProblemCategory::from_label("fertilizer"),
            Some(ProblemCategory::Fertilizer)
        );
        assert_eq!(
            ProblemCategory::from_label("Disease"),
            Some(ProblemCategory::Disease)
        );
        assert_eq!(
            ProblemCategory::from_label("MARKET"),
            Some(ProblemCategory::Market)
        );
        assert_eq!(
            ProblemCategory::from_label(" general "),
            Some(ProblemCategory::General)
        );
    }

    #[test]
    fn rejects_anything_else() {
        assert_eq!(ProblemCategory::from_label("weather"), None);
        assert_eq!(ProblemCategory::from_label(""), None);
        assert_eq!(ProblemCategory::from_label("none"), None);
    }
}
