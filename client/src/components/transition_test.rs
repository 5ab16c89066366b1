use super::*;

#[test]
fn container_class_includes_style_suffix() {
    assert_eq!(container_class(TransitionStyle::Bounce), "page-transition-container bounce-transition");
    assert_eq!(container_class(TransitionStyle::Slide), "page-transition-container slide-transition");
}
