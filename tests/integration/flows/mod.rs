//! End-to-end form flows: controller, facade and mocked backend together

mod forms_test;
