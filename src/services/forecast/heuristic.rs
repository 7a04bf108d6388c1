//! 学业预测打分
//!
//! 加权启发式，不是训练得到的模型。权重、阈值和截断区间都来自 `forecast.*` 配置。

use crate::config::ForecastConfig;
use crate::models::forecast::entities::{
    ForecastMetrics, ForecastScores, PerformanceTrend, RiskLevel,
};
use crate::models::grades::responses::SemesterSummary;

/// 趋势判定的 SGPA 变化阈值
const TREND_DELTA: f64 = 0.1;

/// 截断到 [0, 1]，非有限值按 0 处理
fn unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn clamp_score(value: f64, min: i32, max: i32) -> i32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if !value.is_finite() {
        return lo;
    }
    (value.round().clamp(f64::from(lo), f64::from(hi))) as i32
}

/// 归一化后的四项因子
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factors {
    pub cgpa: f64,
    pub attendance: f64,
    pub quiz: f64,
    pub engagement: f64,
}

impl Factors {
    pub fn from_metrics(metrics: &ForecastMetrics, config: &ForecastConfig) -> Self {
        let engagement = if config.engagement_hour_cap > 0.0 {
            unit(metrics.engagement_hours / config.engagement_hour_cap)
        } else {
            0.0
        };
        Self {
            cgpa: unit(metrics.cgpa / 10.0),
            attendance: unit(metrics.attendance_percentage / 100.0),
            quiz: unit(metrics.quiz_average / 100.0),
            engagement,
        }
    }
}

pub fn compute_scores(metrics: &ForecastMetrics, config: &ForecastConfig) -> ForecastScores {
    let f = Factors::from_metrics(metrics, config);

    let success = 100.0
        * (config.cgpa_weight * f.cgpa
            + config.attendance_weight * f.attendance
            + config.engagement_weight * f.engagement
            + config.quiz_weight * f.quiz);

    let mut risk = f64::from(metrics.arrears.max(0)) * config.arrear_penalty;
    if metrics.attendance_percentage < config.attendance_threshold {
        risk += config.attendance_penalty;
    }
    if metrics.quiz_average < config.quiz_threshold {
        risk += config.quiz_penalty;
    }
    if metrics.cgpa < config.cgpa_threshold {
        risk += config.cgpa_penalty;
    }

    let improvement = 100.0
        * (config.improvement_cgpa_weight * (1.0 - f.cgpa)
            + config.improvement_shortfall_weight * (1.0 - f.engagement.min(f.attendance)));

    ForecastScores {
        success_probability: clamp_score(success, config.score_min, config.score_max),
        risk_index: clamp_score(risk, config.score_min, config.score_max),
        improvement_potential: clamp_score(improvement, config.score_min, config.improvement_max),
    }
}

pub fn risk_level(risk_index: i32) -> RiskLevel {
    match risk_index {
        r if r >= 60 => RiskLevel::High,
        r if r >= 30 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

/// 比较最近两个学期的 SGPA，不足两个学期时为 Stable
pub fn performance_trend(semesters: &[SemesterSummary]) -> PerformanceTrend {
    let mut graded: Vec<&SemesterSummary> =
        semesters.iter().filter(|s| s.total_credits > 0.0).collect();
    graded.sort_by_key(|s| s.semester);

    match graded.as_slice() {
        [.., previous, latest] => {
            let delta = latest.sgpa - previous.sgpa;
            if delta > TREND_DELTA {
                PerformanceTrend::Improving
            } else if delta < -TREND_DELTA {
                PerformanceTrend::Declining
            } else {
                PerformanceTrend::Stable
            }
        }
        _ => PerformanceTrend::Stable,
    }
}

/// min(10, cgpa + (success - 50) / 100)，保留两位小数
pub fn predicted_gpa(cgpa: f64, success_probability: i32) -> f64 {
    let cgpa = if cgpa.is_finite() { cgpa } else { 0.0 };
    let raw = (cgpa + f64::from(success_probability - 50) / 100.0).clamp(0.0, 10.0);
    (raw * 100.0).round() / 100.0
}

/// 各项输入是否有实际数据
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataCoverage {
    pub grades: bool,
    pub attendance: bool,
    pub quizzes: bool,
    pub activity: bool,
}

/// 有数据支撑的输入占比，每项 0.25
pub fn confidence_score(coverage: DataCoverage) -> f64 {
    [
        coverage.grades,
        coverage.attendance,
        coverage.quizzes,
        coverage.activity,
    ]
    .iter()
    .filter(|covered| **covered)
    .count() as f64
        * 0.25
}

pub fn risk_factors(metrics: &ForecastMetrics, config: &ForecastConfig) -> Vec<String> {
    let mut factors = Vec::new();
    if metrics.arrears > 0 {
        factors.push(format!("{} pending arrear(s)", metrics.arrears));
    }
    if metrics.attendance_percentage < config.attendance_threshold {
        factors.push(format!(
            "Attendance {:.1}% is below {:.0}%",
            metrics.attendance_percentage, config.attendance_threshold
        ));
    }
    if metrics.quiz_average < config.quiz_threshold {
        factors.push(format!(
            "Average quiz score {:.1}% is below {:.0}%",
            metrics.quiz_average, config.quiz_threshold
        ));
    }
    if metrics.cgpa < config.cgpa_threshold {
        factors.push(format!(
            "CGPA {:.2} is below {:.1}",
            metrics.cgpa, config.cgpa_threshold
        ));
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(cgpa: f64, arrears: i32, attendance: f64, quiz: f64, hours: f64) -> ForecastMetrics {
        ForecastMetrics {
            cgpa,
            arrears,
            attendance_percentage: attendance,
            quiz_average: quiz,
            engagement_hours: hours,
            earned_credits: 100,
        }
    }

    fn summary(semester: i32, sgpa: f64) -> SemesterSummary {
        SemesterSummary {
            semester,
            total_credits: 20.0,
            total_points: sgpa * 20.0,
            sgpa,
        }
    }

    #[test]
    fn test_known_student() {
        let config = ForecastConfig::default();
        // cgpa 8.0, 出勤 90%, 测验 80%, 学习 10 小时 (上限 20)
        let scores = compute_scores(&metrics(8.0, 0, 90.0, 80.0, 10.0), &config);
        // 100 × (0.4×0.8 + 0.3×0.9 + 0.2×0.5 + 0.1×0.8) = 77
        assert_eq!(scores.success_probability, 77);
        // 无任何扣分项，截断到下限
        assert_eq!(scores.risk_index, 2);
        // 100 × (0.6×0.2 + 0.4×0.5) = 32
        assert_eq!(scores.improvement_potential, 32);
    }

    #[test]
    fn test_struggling_student() {
        let config = ForecastConfig::default();
        let scores = compute_scores(&metrics(5.5, 3, 60.0, 30.0, 0.0), &config);
        // 36 + 35 + 20 + 15 = 106，截断到 98
        assert_eq!(scores.risk_index, 98);
        assert_eq!(risk_level(scores.risk_index), RiskLevel::High);
        // 100 × (0.6×0.45 + 0.4×1.0) = 67，截断到 55
        assert_eq!(scores.improvement_potential, 55);
    }

    #[test]
    fn test_scores_stay_within_clamps() {
        let config = ForecastConfig::default();
        let cgpas = [-5.0, 0.0, 4.2, 7.0, 9.9, 10.0, 25.0, f64::NAN, f64::INFINITY];
        let percentages = [-50.0, 0.0, 49.9, 75.0, 100.0, 400.0, f64::NAN];
        let hours = [-10.0, 0.0, 5.0, 20.0, 1e9, f64::NAN];
        let arrears = [-3, 0, 1, 5, 1000, i32::MAX];

        for &cgpa in &cgpas {
            for &attendance in &percentages {
                for &quiz in &percentages {
                    for &h in &hours {
                        for &a in &arrears {
                            let s = compute_scores(&metrics(cgpa, a, attendance, quiz, h), &config);
                            assert!((2..=98).contains(&s.success_probability), "{s:?}");
                            assert!((2..=98).contains(&s.risk_index), "{s:?}");
                            assert!((2..=55).contains(&s.improvement_potential), "{s:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_inverted_clamp_config_does_not_panic() {
        let config = ForecastConfig {
            score_min: 90,
            score_max: 10,
            ..ForecastConfig::default()
        };
        let s = compute_scores(&metrics(8.0, 0, 90.0, 80.0, 10.0), &config);
        assert!((10..=90).contains(&s.success_probability));
    }

    #[test]
    fn test_risk_level_bands() {
        assert_eq!(risk_level(2), RiskLevel::Low);
        assert_eq!(risk_level(29), RiskLevel::Low);
        assert_eq!(risk_level(30), RiskLevel::Medium);
        assert_eq!(risk_level(59), RiskLevel::Medium);
        assert_eq!(risk_level(60), RiskLevel::High);
    }

    #[test]
    fn test_performance_trend() {
        assert_eq!(performance_trend(&[]), PerformanceTrend::Stable);
        assert_eq!(performance_trend(&[summary(1, 8.0)]), PerformanceTrend::Stable);
        assert_eq!(
            performance_trend(&[summary(1, 7.5), summary(2, 8.0)]),
            PerformanceTrend::Improving
        );
        assert_eq!(
            performance_trend(&[summary(2, 7.5), summary(1, 8.0)]),
            PerformanceTrend::Declining
        );
        assert_eq!(
            performance_trend(&[summary(1, 8.0), summary(2, 8.05)]),
            PerformanceTrend::Stable
        );
    }

    #[test]
    fn test_predicted_gpa() {
        assert_eq!(predicted_gpa(8.0, 77), 8.27);
        assert_eq!(predicted_gpa(9.9, 98), 10.0);
        assert_eq!(predicted_gpa(0.1, 2), 0.0);
        assert_eq!(predicted_gpa(f64::NAN, 50), 0.0);
    }

    #[test]
    fn test_confidence_score() {
        assert_eq!(confidence_score(DataCoverage::default()), 0.0);
        assert_eq!(
            confidence_score(DataCoverage {
                grades: true,
                attendance: true,
                quizzes: false,
                activity: true,
            }),
            0.75
        );
    }

    #[test]
    fn test_risk_factors() {
        let config = ForecastConfig::default();
        assert!(risk_factors(&metrics(8.0, 0, 90.0, 80.0, 10.0), &config).is_empty());

        let factors = risk_factors(&metrics(6.0, 2, 70.0, 40.0, 0.0), &config);
        assert_eq!(factors.len(), 4);
        assert!(factors[0].contains("2 pending arrear"));
        assert!(factors[1].contains("Attendance 70.0%"));
    }
}
