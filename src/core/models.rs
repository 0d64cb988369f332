//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the benchmark
//! matrix: scenes with their distance offsets, execution variants, ray
//! distributions, matrix cells and the per-run measurement result.
//!
//! 此模块定义了整个基准矩阵中使用的核心数据结构：
//! 带距离偏移的场景、执行变体、光线分布、矩阵单元以及单次运行的测量结果。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// The flag that puts the candidate renderer into packet mode.
/// The reference renderer has no such mode, so cells using it skip the reference run.
/// 使候选渲染器进入数据包模式的标志。
pub const PACKET_MODE_FLAG: &str = "-p";

/// Upper distance bound used for every distribution that is not ambient occlusion.
/// 非环境光遮蔽分布所使用的距离上限。
pub const UNBOUNDED_TMAX: f64 = 1.0e9;

/// A benchmark scene and its near / far distance offsets.
/// 一个基准场景及其近 / 远距离偏移。
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSpec {
    /// Scene directory name under the scenes root / 场景根目录下的场景目录名
    pub name: String,
    /// Near distance applied to every distribution / 应用于所有分布的近距离
    pub tmin: f64,
    /// Far distance applied to the ambient-occlusion workload only.
    /// 仅应用于环境光遮蔽负载的远距离。
    pub ao_tmax: f64,
}

impl SceneSpec {
    pub fn new(name: impl Into<String>, tmin: f64, ao_tmax: f64) -> Self {
        Self {
            name: name.into(),
            tmin,
            ao_tmax,
        }
    }

    /// Returns the `(tmin, tmax)` pair for the given distribution.
    /// Only occlusion queries are clipped; primary and bounce rays are left unbounded.
    ///
    /// 返回给定分布的 `(tmin, tmax)` 对。
    /// 只有遮蔽查询会被裁剪；主光线和反弹光线不受限制。
    pub fn distance_bounds(&self, distribution: RayDistribution) -> (f64, f64) {
        let tmax = match distribution {
            RayDistribution::AmbientOcclusion => self.ao_tmax,
            RayDistribution::Primary | RayDistribution::Bounces => UNBOUNDED_TMAX,
        };
        (self.tmin, tmax)
    }

    /// Path to the precomputed ray file of this scene for `distribution`.
    /// 此场景针对 `distribution` 的预计算光线文件路径。
    pub fn ray_file(&self, scenes_root: &Path, distribution: RayDistribution) -> PathBuf {
        scenes_root
            .join(&self.name)
            .join(format!("{}.rays", distribution.as_str()))
    }

    /// Path to the scene asset a renderer with the given role loads.
    /// 具有给定角色的渲染器加载的场景资源路径。
    pub fn asset_file(&self, scenes_root: &Path, role: RendererRole) -> PathBuf {
        scenes_root
            .join(&self.name)
            .join(format!("{}.{}", self.name, role.asset_extension()))
    }
}

/// One execution configuration: an ordered list of renderer flags.
/// 一个执行配置：有序的渲染器标志列表。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// The variant as written in the matrix, e.g. `-w 8 -p`.
    /// 矩阵中书写的变体，例如 `-w 8 -p`。
    pub label: String,
    /// The flags appended verbatim to every argument list.
    /// 原样追加到每个参数列表的标志。
    pub flags: Vec<String>,
}

impl Variant {
    /// Splits a variant string into flags using shell quoting rules.
    /// Returns `None` if the string cannot be split or holds no flags.
    pub fn parse(label: &str) -> Option<Self> {
        let flags = shlex::split(label)?;
        if flags.is_empty() {
            return None;
        }
        Some(Self {
            label: label.trim().to_string(),
            flags,
        })
    }

    /// Whether the variant runs in packet mode, which only the candidate supports.
    /// 变体是否以数据包模式运行（仅候选渲染器支持）。
    pub fn is_packet_mode(&self) -> bool {
        self.flags.iter().any(|flag| flag == PACKET_MODE_FLAG)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Which precomputed set of rays is replayed.
/// 重放哪一组预计算光线。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RayDistribution {
    /// Camera rays / 相机光线
    #[serde(rename = "primary")]
    Primary,
    /// Ambient-occlusion shadow rays / 环境光遮蔽阴影光线
    #[serde(rename = "ao")]
    AmbientOcclusion,
    /// Secondary bounce rays / 二次反弹光线
    #[serde(rename = "bounces")]
    Bounces,
}

impl RayDistribution {
    /// All distributions in generation order.
    pub const ALL: [RayDistribution; 3] = [
        RayDistribution::Primary,
        RayDistribution::AmbientOcclusion,
        RayDistribution::Bounces,
    ];

    /// The name used in ray file names and report lines.
    /// 用于光线文件名和报告行的名称。
    pub fn as_str(&self) -> &'static str {
        match self {
            RayDistribution::Primary => "primary",
            RayDistribution::AmbientOcclusion => "ao",
            RayDistribution::Bounces => "bounces",
        }
    }
}

impl fmt::Display for RayDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two renderers under comparison.
/// 参与比较的两个渲染器。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RendererRole {
    /// Loads `.obj` geometry and builds its own acceleration structure.
    /// 加载 `.obj` 几何体并构建自己的加速结构。
    Reference,
    /// Loads a prebuilt `.bvh` acceleration structure.
    /// 加载预构建的 `.bvh` 加速结构。
    Candidate,
}

impl RendererRole {
    /// The command-line flag introducing the scene asset.
    pub fn asset_flag(&self) -> &'static str {
        match self {
            RendererRole::Reference => "-obj",
            RendererRole::Candidate => "-bvh",
        }
    }

    pub fn asset_extension(&self) -> &'static str {
        match self {
            RendererRole::Reference => "obj",
            RendererRole::Candidate => "bvh",
        }
    }

    /// Whether this renderer supports the given variant.
    /// 此渲染器是否支持给定的变体。
    pub fn supports(&self, variant: &Variant) -> bool {
        match self {
            RendererRole::Reference => !variant.is_packet_mode(),
            RendererRole::Candidate => true,
        }
    }
}

/// One (scene, variant, distribution) combination.
/// 一个 (场景, 变体, 分布) 组合。
#[derive(Debug, Clone, Copy)]
pub struct MatrixCell<'a> {
    pub scene: &'a SceneSpec,
    pub variant: &'a Variant,
    pub distribution: RayDistribution,
}

/// A fully derived command line for one renderer.
/// 为一个渲染器完整推导出的命令行。
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Path of the renderer executable / 渲染器可执行文件路径
    pub program: PathBuf,
    /// Every argument after the program name / 程序名之后的所有参数
    pub args: Vec<String>,
}

impl Invocation {
    /// The full argument vector including the program.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

/// The runs derived for one matrix cell.
/// 为一个矩阵单元推导出的运行。
#[derive(Debug, Clone)]
pub struct CellPlan<'a> {
    pub cell: MatrixCell<'a>,
    /// `None` when the variant is not applicable to the reference renderer.
    /// 当变体不适用于参考渲染器时为 `None`。
    pub reference: Option<Invocation>,
    pub candidate: Invocation,
}

/// Throughput in millions of rays per second, or `None` when no measurement was obtained.
/// 以每秒百万光线为单位的吞吐量；未获得测量值时为 `None`。
pub type RunResult = Option<f64>;

/// The outcome of one matrix cell, ready for reporting.
/// 一个矩阵单元的结果，可用于报告。
#[derive(Debug, Clone, PartialEq)]
pub struct CellReport {
    pub scene: String,
    pub distribution: RayDistribution,
    pub variant: String,
    /// Whether a reference run was planned for this cell.
    pub reference_applicable: bool,
    pub reference: RunResult,
    pub candidate: RunResult,
}

/// Formats a float the way the report and renderer arguments expect:
/// always with a decimal point and never in exponent notation.
///
/// 按报告和渲染器参数期望的方式格式化浮点数：
/// 始终带小数点，且从不使用指数表示法。
pub fn format_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

