use kira_whz::scores::WhzError;
use kira_whz::scores::classify::{Language, WhzClass, classify, classify_outcome};

#[test]
fn boundaries_are_exact() {
    assert_eq!(classify(2.0), WhzClass::Overweight);
    assert_eq!(classify(1.9999), WhzClass::RiskOfOverweight);
    assert_eq!(classify(1.0), WhzClass::RiskOfOverweight);
    assert_eq!(classify(0.9999), WhzClass::Normal);
    assert_eq!(classify(-2.0), WhzClass::Normal);
    assert_eq!(classify(-2.0001), WhzClass::ModerateAcuteMalnutrition);
    assert_eq!(classify(-3.0), WhzClass::ModerateAcuteMalnutrition);
    assert_eq!(classify(-3.0001), WhzClass::SevereAcuteMalnutrition);
}

#[test]
fn extremes() {
    assert_eq!(classify(f64::INFINITY), WhzClass::Overweight);
    assert_eq!(classify(f64::NEG_INFINITY), WhzClass::SevereAcuteMalnutrition);
    assert_eq!(classify(f64::NAN), WhzClass::Unknown);
}

#[test]
fn outcomes_without_score_are_unknown() {
    assert_eq!(classify_outcome(&Ok(None)), WhzClass::Unknown);
    assert_eq!(
        classify_outcome(&Err(WhzError::InvalidInput("x".into()))),
        WhzClass::Unknown
    );
    assert_eq!(classify_outcome(&Ok(Some(0.0))), WhzClass::Normal);
}

#[test]
fn labels_match_output_vocabulary() {
    assert_eq!(WhzClass::Overweight.label(Language::Es), "Sobrepeso");
    assert_eq!(
        WhzClass::RiskOfOverweight.label(Language::Es),
        "Riesgo de sobrepeso"
    );
    assert_eq!(
        WhzClass::SevereAcuteMalnutrition.label(Language::Es),
        "Desnutrición aguda severa"
    );
    assert_eq!(WhzClass::Unknown.label(Language::Es), "Desconocido");
    assert_eq!(
        WhzClass::ModerateAcuteMalnutrition.label(Language::En),
        "Moderate acute malnutrition"
    );
}

#[test]
fn chart_order_is_severe_to_overweight() {
    assert_eq!(WhzClass::CHARTED[0], WhzClass::SevereAcuteMalnutrition);
    assert_eq!(WhzClass::CHARTED[4], WhzClass::Overweight);
    assert!(!WhzClass::CHARTED.contains(&WhzClass::Unknown));
}
