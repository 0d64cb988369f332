//! # Matrix Planner Module / 矩阵计划模块
//!
//! Enumerates the scene × variant × distribution product in a fixed nested
//! order (scene outer, variant middle, distribution inner) and derives the
//! argument lists of each cell.
//!
//! 以固定的嵌套顺序（场景在外、变体居中、分布在内）枚举 场景 × 变体 × 分布 的乘积，
//! 并推导每个单元的参数列表。

use crate::core::config::MatrixTables;
use crate::core::models::{CellPlan, Invocation, MatrixCell, RendererRole, format_float};

/// Walks every cell of the matrix in generation order.
/// 按生成顺序遍历矩阵的每个单元。
pub fn cells(tables: &MatrixTables) -> impl Iterator<Item = MatrixCell<'_>> {
    tables.scenes.iter().flat_map(move |scene| {
        tables.variants.iter().flat_map(move |variant| {
            tables
                .distributions
                .iter()
                .map(move |&distribution| MatrixCell {
                    scene,
                    variant,
                    distribution,
                })
        })
    })
}

/// The arguments shared by both renderers for a cell: ray file, distance bounds,
/// counters and the variant flags.
///
/// 一个单元中两个渲染器共享的参数：光线文件、距离范围、计数器以及变体标志。
pub fn shared_args(tables: &MatrixTables, cell: &MatrixCell<'_>) -> Vec<String> {
    let (tmin, tmax) = cell.scene.distance_bounds(cell.distribution);
    let ray_file = cell.scene.ray_file(&tables.scenes_root, cell.distribution);

    let mut args = vec![
        "-ray".to_string(),
        ray_file.display().to_string(),
        "-tmin".to_string(),
        format_float(tmin),
        "-tmax".to_string(),
        format_float(tmax),
        "-bench".to_string(),
        tables.iterations.to_string(),
        "-warmup".to_string(),
        tables.warmup.to_string(),
    ];
    args.extend(cell.variant.flags.iter().cloned());
    args
}

/// Derives the command line of `role` for `cell`. Applicability is decided by
/// [`plan_cell`], not here.
///
/// 为 `cell` 推导 `role` 的命令行。适用性由 [`plan_cell`] 决定。
pub fn invocation(tables: &MatrixTables, cell: &MatrixCell<'_>, role: RendererRole) -> Invocation {
    let asset = cell.scene.asset_file(&tables.scenes_root, role);
    let mut args = vec![role.asset_flag().to_string(), asset.display().to_string()];
    args.extend(shared_args(tables, cell));
    Invocation {
        program: tables.executable(role).to_path_buf(),
        args,
    }
}

/// Plans a single cell. The reference run is dropped when the variant is
/// packet mode; the candidate run is always planned.
///
/// 计划单个单元。当变体为数据包模式时丢弃参考运行；候选运行总是被计划。
pub fn plan_cell<'a>(tables: &MatrixTables, cell: MatrixCell<'a>) -> CellPlan<'a> {
    let reference = RendererRole::Reference
        .supports(cell.variant)
        .then(|| invocation(tables, &cell, RendererRole::Reference));
    let candidate = invocation(tables, &cell, RendererRole::Candidate);
    CellPlan {
        cell,
        reference,
        candidate,
    }
}

/// Plans the whole matrix lazily, in generation order.
/// 按生成顺序惰性地计划整个矩阵。
pub fn plan_matrix(tables: &MatrixTables) -> impl Iterator<Item = CellPlan<'_>> {
    cells(tables).map(move |cell| plan_cell(tables, cell))
}

/// Number of cells the matrix will produce.
pub fn cell_count(tables: &MatrixTables) -> usize {
    tables.scenes.len() * tables.variants.len() * tables.distributions.len()
}

