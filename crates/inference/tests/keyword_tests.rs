use {
    image::Image,
    inference::{InferError, InferenceModel, KeywordModel},
    std::time::Duration,
};

#[test]
fn test_respond_english_keywords() {
    assert_eq!(KeywordModel::respond("please take off now"), "TAKEOFF");
    assert_eq!(KeywordModel::respond("Land on the pad"), "LAND");
    assert_eq!(KeywordModel::respond("move forward a bit"), "FORWARD:5");
    assert_eq!(KeywordModel::respond("go home"), "RTL");
    assert_eq!(KeywordModel::respond("step back"), "BACKWARD:5");
    assert_eq!(KeywordModel::respond("drift LEFT"), "LEFT:5");
    assert_eq!(KeywordModel::respond("turn right"), "RIGHT:5");
    assert_eq!(KeywordModel::respond("hover here"), "LOITER");
}

#[test]
fn test_respond_chinese_keywords() {
    assert_eq!(KeywordModel::respond("起飞"), "TAKEOFF");
    assert_eq!(KeywordModel::respond("请降落"), "LAND");
    assert_eq!(KeywordModel::respond("向前进"), "FORWARD:5");
    assert_eq!(KeywordModel::respond("返航"), "RTL");
}

#[test]
fn test_respond_unknown() {
    assert_eq!(KeywordModel::respond("sing a song"), "UNKNOWN_COMMAND");
}

#[tokio::test]
async fn test_infer_returns_command_text() {
    let model = KeywordModel::new(Duration::ZERO);
    let image = Image::solid(224, 224, [0, 0, 0]).unwrap();
    let output = model.infer(&image, "takeoff").await.unwrap();
    assert_eq!(output, "TAKEOFF");
}

#[test]
fn test_infer_error_display() {
    let err = InferError::Runtime("cuda out of memory".to_string());
    let display = err.to_string();
    assert!(display.contains("runtime error"));
    assert!(display.contains("cuda out of memory"));
}
