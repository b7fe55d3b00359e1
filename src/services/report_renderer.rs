//! Renders the emailed benchmark report from an embedded Tera template.

use crate::models::{BenchmarkReport, Priority};
use anyhow::{Context, Result};
use serde::Serialize;
use tera::{Context as TeraContext, Tera};

const REPORT_TEMPLATE_NAME: &str = "benchmark_report.html";

#[derive(Debug, Serialize)]
struct MetricRow {
    label: &'static str,
    user: f64,
    benchmark: f64,
    diff: f64,
}

#[derive(Debug, Serialize)]
struct RecommendationRow<'a> {
    priority: &'static str,
    color: &'static str,
    message: &'a str,
    action: &'a str,
}

fn priority_style(priority: Priority) -> (&'static str, &'static str) {
    match priority {
        Priority::High => ("HIGH", "#dc2626"),
        Priority::Medium => ("MEDIUM", "#d97706"),
        Priority::Low => ("LOW", "#4f46e5"),
    }
}

pub struct ReportRenderer {
    tera: Tera,
    demo_url: String,
}

impl ReportRenderer {
    pub fn new(demo_url: impl Into<String>) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE)
            .context("Failed to add benchmark report template")?;

        Ok(Self {
            tera,
            demo_url: demo_url.into(),
        })
    }

    pub fn render(&self, report: &BenchmarkReport) -> Result<String> {
        let metrics: Vec<MetricRow> = report
            .evaluation
            .results
            .labelled()
            .into_iter()
            .map(|(label, metric)| MetricRow {
                label,
                user: metric.user,
                benchmark: metric.benchmark,
                diff: metric.diff,
            })
            .collect();

        let recommendations: Vec<RecommendationRow> = report
            .evaluation
            .recommendations
            .iter()
            .map(|rec| {
                let (priority, color) = priority_style(rec.priority);
                RecommendationRow {
                    priority,
                    color,
                    message: &rec.message,
                    action: &rec.action,
                }
            })
            .collect();

        let mut context = TeraContext::new();
        context.insert("category", &report.profile.category);
        context.insert("region", &report.profile.region);
        context.insert("plan_type", &report.profile.plan_type);
        context.insert("metrics", &metrics);
        context.insert("recommendations", &recommendations);
        context.insert("demo_url", &self.demo_url);

        self.tera
            .render(REPORT_TEMPLATE_NAME, &context)
            .context("Failed to render benchmark report")
    }
}

const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Your App Benchmark Report</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
  <h1>Your App Benchmark Report</h1>
  <p>Here are your benchmark results for {{ category }} in {{ region }} ({{ plan_type }} plan):</p>

  <div style="margin: 20px 0;">
    <h2>Metrics Comparison</h2>
    {% for metric in metrics %}
    <div style="margin: 10px 0; padding: 10px; border: 1px solid #ddd;">
      <h3 style="margin: 0;">{{ metric.label }}</h3>
      <p>Your value: {{ metric.user }}</p>
      <p>Benchmark: {{ metric.benchmark }}</p>
      <p>Difference: {{ metric.diff }}%</p>
    </div>
    {% endfor %}
  </div>

  <div style="margin: 20px 0;">
    <h2>Recommendations</h2>
    {% for rec in recommendations %}
    <div style="margin: 10px 0; padding: 10px; border: 1px solid #ddd;">
      <h3 style="margin: 0; color: {{ rec.color }}">{{ rec.priority }} Priority</h3>
      <p>{{ rec.message }}</p>
      <p style="font-style: italic;">{{ rec.action }}</p>
    </div>
    {% endfor %}
  </div>

  <div style="margin-top: 30px; padding: 20px; background: #f3f4f6; text-align: center;">
    <p>Want to improve these metrics?</p>
    <a href="{{ demo_url | safe }}" style="display: inline-block; padding: 10px 20px; background: #4f46e5; color: white; text-decoration: none; border-radius: 5px;">
      Schedule Demo
    </a>
  </div>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AppProfile, ComparisonSet, Evaluation, MetricComparison, Recommendation,
        RecommendationKind,
    };

    fn report(category: &str) -> BenchmarkReport {
        BenchmarkReport {
            recipient: "founder@example.com".to_string(),
            profile: AppProfile {
                category: category.to_string(),
                region: "Europe".to_string(),
                plan_type: "annual".to_string(),
            },
            evaluation: Evaluation {
                results: ComparisonSet {
                    pricing: MetricComparison::new(30.0, Some(42.0)),
                    conversion: MetricComparison::new(2.0, Some(1.83)),
                    ltv: MetricComparison::new(39.9, Some(39.9)),
                    refund: MetricComparison::new(3.1, None),
                },
                recommendations: vec![
                    Recommendation::new(
                        RecommendationKind::Pricing,
                        Priority::Medium,
                        "Consider testing a price increase",
                        "Test 10-15% price increase",
                    ),
                    Recommendation::new(
                        RecommendationKind::Platform,
                        Priority::Low,
                        "Track these metrics",
                        "Schedule a demo",
                    ),
                ],
            },
        }
    }

    #[test]
    fn renders_metrics_and_recommendations() {
        let renderer = ReportRenderer::new("https://example.com/demo").unwrap();
        let html = renderer.render(&report("Lifestyle")).unwrap();

        assert!(html.contains("benchmark results for Lifestyle in Europe"));
        assert!(html.contains("<h3 style=\"margin: 0;\">Pricing</h3>"));
        assert!(html.contains("Difference: -28.6%"));
        assert!(html.contains("MEDIUM Priority"));
        assert!(html.contains("color: #d97706"));
        assert!(html.contains("LOW Priority"));
        assert!(html.contains("href=\"https://example.com/demo\""));
    }

    #[test]
    fn escapes_user_supplied_text() {
        let renderer = ReportRenderer::new("https://example.com/demo").unwrap();
        let html = renderer.render(&report("<script>alert(1)</script>")).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
