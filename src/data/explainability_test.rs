use super::*;

#[test]
fn direction_follows_the_sign_of_importance() {
    let positive = ShapValue { feature: "Credit Score", importance: 0.45 };
    let negative = ShapValue { feature: "Age", importance: -0.12 };
    let zero = ShapValue { feature: "Flat", importance: 0.0 };

    assert_eq!(positive.direction(), Direction::Positive);
    assert_eq!(negative.direction(), Direction::Negative);
    assert_eq!(zero.direction(), Direction::Positive);
}

#[test]
fn shap_values_are_sorted_by_absolute_magnitude() {
    let values = mock_shap_values();
    assert!(values
        .windows(2)
        .all(|pair| pair[0].importance.abs() >= pair[1].importance.abs()));
}

#[test]
fn sample_predictions_list_three_top_features_each() {
    assert!(mock_sample_predictions()
        .iter()
        .all(|sample| sample.top_features.len() == 3));
}
