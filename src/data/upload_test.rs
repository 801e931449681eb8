use super::*;

#[test]
fn model_extensions_classify_as_model() {
    assert_eq!(classify_file("credit_model.pkl"), FileKind::Model);
    assert_eq!(classify_file("weights.H5"), FileKind::Model);
    assert_eq!(classify_file("pipeline.joblib"), FileKind::Model);
}

#[test]
fn everything_else_classifies_as_dataset() {
    assert_eq!(classify_file("training.csv"), FileKind::Dataset);
    assert_eq!(classify_file("labels.parquet"), FileKind::Dataset);
    assert_eq!(classify_file("README"), FileKind::Dataset);
}

#[test]
fn sizes_render_as_megabytes_with_two_decimals() {
    assert_eq!(format_size(12_582_912.0), "12.00 MB");
    assert_eq!(format_size(1_572_864.0), "1.50 MB");
    assert_eq!(format_size(0.0), "0.00 MB");
}
