//! # Models Module Unit Tests / Models 模块单元测试
//!
//! Tests for variants, distributions, renderer roles, asset paths and the
//! report formatting helpers.
//!
//! 测试变体、分布、渲染器角色、资源路径以及报告格式化辅助函数。

use bench_matrix::models::{
    CellReport, Invocation, RayDistribution, RendererRole, SceneSpec, Variant, format_float,
};
use bench_matrix::reporting::MatrixSummary;
use bench_matrix::reporting::console::{ABSENT_MARKER, format_report_line, format_result};
use std::path::{Path, PathBuf};

#[cfg(test)]
mod variant_tests {
    use super::*;

    #[test]
    fn test_variant_flags_are_split_in_order() {
        let variant = Variant::parse("-w 8 -s").unwrap();
        assert_eq!(variant.flags, ["-w", "8", "-s"]);
        assert_eq!(variant.to_string(), "-w 8 -s");
        assert!(!variant.is_packet_mode());
    }

    #[test]
    fn test_packet_mode_is_token_based() {
        assert!(Variant::parse("-w 4 -p").unwrap().is_packet_mode());
        assert!(Variant::parse("-p -w 4").unwrap().is_packet_mode());
        assert!(!Variant::parse("-w 4 -pp").unwrap().is_packet_mode());
    }

    #[test]
    fn test_unparseable_variants() {
        assert!(Variant::parse("").is_none());
        assert!(Variant::parse("   ").is_none());
        assert!(Variant::parse("-w \"4").is_none());
    }

    #[test]
    fn test_renderer_support() {
        let packet = Variant::parse("-w 4 -p").unwrap();
        let plain = Variant::parse("-w 4").unwrap();
        assert!(!RendererRole::Reference.supports(&packet));
        assert!(RendererRole::Reference.supports(&plain));
        assert!(RendererRole::Candidate.supports(&packet));
        assert!(RendererRole::Candidate.supports(&plain));
    }
}

#[cfg(test)]
mod scene_tests {
    use super::*;

    #[test]
    fn test_asset_paths_follow_naming_convention() {
        let scene = SceneSpec::new("san-miguel", 0.01, 5.0);
        let root = Path::new("scenes");
        assert_eq!(
            scene.ray_file(root, RayDistribution::Bounces),
            PathBuf::from("scenes/san-miguel/bounces.rays")
        );
        assert_eq!(
            scene.asset_file(root, RendererRole::Reference),
            PathBuf::from("scenes/san-miguel/san-miguel.obj")
        );
        assert_eq!(
            scene.asset_file(root, RendererRole::Candidate),
            PathBuf::from("scenes/san-miguel/san-miguel.bvh")
        );
    }

    #[test]
    fn test_distribution_names() {
        let names: Vec<_> = RayDistribution::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(names, ["primary", "ao", "bounces"]);
    }

    #[test]
    fn test_invocation_display() {
        let invocation = Invocation {
            program: PathBuf::from("../build/bin/bench_traversal"),
            args: vec!["-bvh".to_string(), "scenes/crown/crown.bvh".to_string()],
        };
        assert_eq!(
            invocation.to_string(),
            "../build/bin/bench_traversal -bvh scenes/crown/crown.bvh"
        );
        assert_eq!(invocation.argv().len(), 3);
    }
}

#[cfg(test)]
mod formatting_tests {
    use super::*;

    fn report(reference: Option<f64>, candidate: Option<f64>, applicable: bool) -> CellReport {
        CellReport {
            scene: "sponza".to_string(),
            distribution: RayDistribution::AmbientOcclusion,
            variant: "-w 4".to_string(),
            reference_applicable: applicable,
            reference,
            candidate,
        }
    }

    #[test]
    fn test_format_float_keeps_decimal_point() {
        assert_eq!(format_float(1.0e9), "1000000000.0");
        assert_eq!(format_float(0.01), "0.01");
        assert_eq!(format_float(1000.0), "1000.0");
        assert_eq!(format_float(123.45), "123.45");
    }

    #[test]
    fn test_absent_values_keep_their_column() {
        assert_eq!(format_result(None), ABSENT_MARKER);
        assert_eq!(
            format_report_line(&report(None, Some(123.45), false)),
            "sponza : ao : -w 4 : None : 123.45"
        );
        assert_eq!(
            format_report_line(&report(Some(99.0), None, true)),
            "sponza : ao : -w 4 : 99.0 : None"
        );
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = MatrixSummary::default();
        summary.record(&report(Some(1.0), Some(2.0), true));
        summary.record(&report(None, Some(2.0), false));
        summary.record(&report(None, None, true));

        assert_eq!(
            summary,
            MatrixSummary {
                cells: 3,
                measured: 3,
                skipped_reference: 1,
                missing: 2,
            }
        );
    }
}
