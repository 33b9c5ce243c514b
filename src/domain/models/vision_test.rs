use super::PoseAnalysis;

#[test]
fn it_builds_failed_analysis() {
    let analysis = PoseAnalysis::failed();
    assert_eq!(analysis.status, "Error");
    assert_eq!(analysis.feedback, "Failed to analyze pose. Please try again.");
    assert_eq!(analysis.confidence_percent(), 0);
    assert!(!analysis.is_perfect());
}

#[test]
fn it_rounds_confidence() {
    let analysis = PoseAnalysis {
        status: "Perfect".to_string(),
        feedback: "Excellent form!".to_string(),
        confidence: 0.916,
    };
    assert!(analysis.is_perfect());
    assert_eq!(analysis.confidence_percent(), 92);
}

#[test]
fn it_clamps_confidence() {
    let analysis = PoseAnalysis {
        status: "Correction Needed".to_string(),
        feedback: "Lift your arms.".to_string(),
        confidence: 1.7,
    };
    assert_eq!(analysis.confidence_percent(), 100);
}
