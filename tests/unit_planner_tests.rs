//! # Planner Unit Tests / Planner 单元测试
//!
//! Tests for matrix enumeration order, distance bounds, argument derivation
//! and the packet-mode skip rule.
//!
//! 测试矩阵枚举顺序、距离范围、参数推导以及数据包模式跳过规则。

mod common;

use bench_matrix::models::{RayDistribution, UNBOUNDED_TMAX};
use bench_matrix::planner::{cell_count, cells, plan_matrix};

fn args_of(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

#[cfg(test)]
mod distance_bound_tests {
    use super::*;

    #[test]
    fn test_unbounded_tmax_for_non_occlusion_distributions() {
        let tables = common::default_tables();
        for scene in &tables.scenes {
            for distribution in [RayDistribution::Primary, RayDistribution::Bounces] {
                let (tmin, tmax) = scene.distance_bounds(distribution);
                assert_eq!(tmin, scene.tmin);
                assert_eq!(tmax, UNBOUNDED_TMAX, "scene {}", scene.name);
            }
        }
    }

    #[test]
    fn test_occlusion_tmax_is_scene_far_offset() {
        let tables = common::default_tables();
        for scene in &tables.scenes {
            let (_, tmax) = scene.distance_bounds(RayDistribution::AmbientOcclusion);
            assert_eq!(tmax, scene.ao_tmax, "scene {}", scene.name);
        }
        let powerplant = tables.scenes.iter().find(|s| s.name == "powerplant").unwrap();
        assert_eq!(powerplant.ao_tmax, 1000.0);
    }

    #[test]
    fn test_bounds_do_not_depend_on_variant() {
        let tables = common::default_tables();
        for plan in plan_matrix(&tables) {
            let expected_tmax = match plan.cell.distribution {
                RayDistribution::AmbientOcclusion => plan.cell.scene.ao_tmax,
                _ => UNBOUNDED_TMAX,
            };
            let args = &plan.candidate.args;
            let tmax_pos = args.iter().position(|a| a == "-tmax").unwrap();
            assert_eq!(args[tmax_pos + 1].parse::<f64>().unwrap(), expected_tmax);
        }
    }
}

#[cfg(test)]
mod enumeration_tests {
    use super::*;

    #[test]
    fn test_cell_count_matches_product() {
        let tables = common::default_tables();
        assert_eq!(cell_count(&tables), 4 * 6 * 3);
        assert_eq!(cells(&tables).count(), cell_count(&tables));
    }

    #[test]
    fn test_generation_order_is_scene_variant_distribution() {
        let tables = common::default_tables();
        let order: Vec<(String, String, RayDistribution)> = cells(&tables)
            .take(7)
            .map(|c| (c.scene.name.clone(), c.variant.label.clone(), c.distribution))
            .collect();

        let expected = vec![
            ("sponza", "-w 4", RayDistribution::Primary),
            ("sponza", "-w 4", RayDistribution::AmbientOcclusion),
            ("sponza", "-w 4", RayDistribution::Bounces),
            ("sponza", "-w 4 -p", RayDistribution::Primary),
            ("sponza", "-w 4 -p", RayDistribution::AmbientOcclusion),
            ("sponza", "-w 4 -p", RayDistribution::Bounces),
            ("sponza", "-w 4 -s", RayDistribution::Primary),
        ];
        let expected: Vec<_> = expected
            .into_iter()
            .map(|(s, v, d)| (s.to_string(), v.to_string(), d))
            .collect();
        assert_eq!(order, expected);

        let last = cells(&tables).last().unwrap();
        assert_eq!(last.scene.name, "powerplant");
        assert_eq!(last.variant.label, "-w 8 -s");
        assert_eq!(last.distribution, RayDistribution::Bounces);
    }

    #[test]
    fn test_planning_is_deterministic() {
        let tables = common::default_tables();
        let first: Vec<_> = plan_matrix(&tables).map(|p| p.candidate).collect();
        let second: Vec<_> = plan_matrix(&tables).map(|p| p.candidate).collect();
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod applicability_tests {
    use super::*;

    #[test]
    fn test_packet_mode_never_plans_reference_run() {
        let tables = common::default_tables();
        for plan in plan_matrix(&tables) {
            if plan.cell.variant.is_packet_mode() {
                assert!(plan.reference.is_none(), "variant {}", plan.cell.variant);
            } else {
                assert!(plan.reference.is_some(), "variant {}", plan.cell.variant);
            }
            assert!(plan.candidate.args.starts_with(&["-bvh".to_string()]));
        }
    }

    #[test]
    fn test_reference_and_candidate_share_ray_arguments() {
        let tables = common::default_tables();
        for plan in plan_matrix(&tables) {
            if let Some(reference) = &plan.reference {
                // Everything after the asset flag and path is shared.
                assert_eq!(reference.args[2..], plan.candidate.args[2..]);
                assert_eq!(reference.args[0], "-obj");
            }
        }
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_sponza_primary_reference_command() {
        let tables = common::default_tables();
        let plan = plan_matrix(&tables)
            .find(|p| {
                p.cell.scene.name == "sponza"
                    && p.cell.distribution == RayDistribution::Primary
                    && p.cell.variant.label == "-w 4"
            })
            .unwrap();

        let reference = plan.reference.expect("reference run must be planned");
        assert_eq!(
            reference.args,
            args_of(
                "-obj scenes/sponza/sponza.obj -ray scenes/sponza/primary.rays -tmin 0.01 \
                 -tmax 1000000000.0 -bench 50 -warmup 10 -w 4"
            )
        );
        assert_eq!(reference.program.to_str(), Some("../build/bin/bench_embree"));
    }

    #[test]
    fn test_powerplant_ao_packet_mode_candidate_command() {
        let tables = common::default_tables();
        let plan = plan_matrix(&tables)
            .find(|p| {
                p.cell.scene.name == "powerplant"
                    && p.cell.distribution == RayDistribution::AmbientOcclusion
                    && p.cell.variant.label == "-w 8 -p"
            })
            .unwrap();

        assert!(plan.reference.is_none());
        assert_eq!(
            plan.candidate.args,
            args_of(
                "-bvh scenes/powerplant/powerplant.bvh -ray scenes/powerplant/ao.rays -tmin 0.01 \
                 -tmax 1000.0 -bench 50 -warmup 10 -w 8 -p"
            )
        );
        assert_eq!(
            plan.candidate.program.to_str(),
            Some("../build/bin/bench_traversal")
        );
    }

    #[test]
    fn test_counters_flow_into_every_run() {
        let mut matrix = bench_matrix::config::BenchMatrix::default();
        matrix.iterations = 7;
        matrix.warmup = 2;
        let tables = matrix.resolve().unwrap();
        for plan in plan_matrix(&tables) {
            let args = &plan.candidate.args;
            let bench = args.iter().position(|a| a == "-bench").unwrap();
            let warmup = args.iter().position(|a| a == "-warmup").unwrap();
            assert_eq!(args[bench + 1], "7");
            assert_eq!(args[warmup + 1], "2");
        }
    }
}
