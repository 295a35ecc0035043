use heart_health::algorithm::features::{bmi, chronic_condition};
use heart_health::models::{
    AlcoholDrinkers, ECigaretteUsage, GeneralHealth, HealthRecord, SmokerStatus, YesNo,
};
use heart_health::{health_score, score_breakdown};
use proptest::prelude::*;

fn arb_measurement(range: std::ops::Range<f64>) -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        1 => Just(None),
        1 => Just(Some(f64::NAN)),
        8 => range.prop_map(Some),
    ]
}

fn arb_yes_no() -> impl Strategy<Value = Option<YesNo>> {
    prop_oneof![Just(None), Just(Some(YesNo::No)), Just(Some(YesNo::Yes))]
}

fn arb_record() -> impl Strategy<Value = HealthRecord> {
    (
        (
            prop::sample::select(vec![
                "Excellent",
                "Very good",
                "Good",
                "Fair",
                "Poor",
                "Unsure",
            ]),
            prop::sample::select(vec![
                "Never smoked",
                "Former smoker",
                "Current smoker - now smokes some days",
                "Current smoker - now smokes every day",
                "",
            ]),
            prop::sample::select(vec![
                "Never used e-cigarettes in my entire life",
                "Not at all (right now)",
                "Use them some days",
                "Use them every day",
                "Sometimes",
            ]),
            prop::sample::select(vec!["Yes", "No", "Refused"]),
        ),
        (
            arb_measurement(-5.0..60.0),
            arb_measurement(-5.0..60.0),
            arb_measurement(-1.0..40.0),
            arb_measurement(0.0..3.0),
            arb_measurement(0.0..400.0),
        ),
        prop::collection::vec(arb_yes_no(), 10),
    )
        .prop_map(
            |((health, smoker, ecig, alcohol), (phys, mental, sleep, height, weight), flags)| {
                HealthRecord {
                    general_health: GeneralHealth::from_label(health),
                    smoker_status: SmokerStatus::from_label(smoker),
                    e_cigarette_usage: ECigaretteUsage::from_label(ecig),
                    alcohol_drinkers: AlcoholDrinkers::from_label(alcohol),
                    physical_health_days: phys,
                    mental_health_days: mental,
                    sleep_hours: sleep,
                    height_in_meters: height,
                    weight_in_kilograms: weight,
                    had_heart_attack: flags[0],
                    had_angina: flags[1],
                    had_stroke: flags[2],
                    had_asthma: flags[3],
                    had_skin_cancer: flags[4],
                    had_copd: flags[5],
                    had_depressive_disorder: flags[6],
                    had_kidney_disease: flags[7],
                    had_arthritis: flags[8],
                    had_diabetes: flags[9],
                    ..HealthRecord::default()
                }
            },
        )
}

proptest! {
    #[test]
    fn score_is_always_within_bounds(record in arb_record()) {
        let breakdown = score_breakdown(&record);
        prop_assert!(breakdown.score <= 100);
        prop_assert_eq!(
            i32::from(breakdown.score),
            breakdown.raw_total.clamp(0, 100)
        );
        prop_assert_eq!(health_score(&record), breakdown.score);
    }

    #[test]
    fn bmi_defined_only_with_both_measurements(
        height in prop::option::of(0.5..2.5f64),
        weight in prop::option::of(20.0..300.0f64),
    ) {
        let value = bmi(weight, height);
        match (height, weight) {
            (Some(h), Some(w)) => {
                let expected = w / (h * h);
                prop_assert!(value.is_some_and(|b| (b - expected).abs() < 1e-9));
            }
            _ => prop_assert!(value.is_none()),
        }
    }

    #[test]
    fn chronic_flag_matches_any_yes(record in arb_record()) {
        let any_yes = record
            .chronic_flags()
            .iter()
            .any(|(_, flag)| *flag == Some(YesNo::Yes));
        prop_assert_eq!(chronic_condition(&record).is_chronic(), any_yes);
    }
}
