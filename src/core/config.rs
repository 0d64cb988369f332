//! # Matrix Configuration Module / 矩阵配置模块
//!
//! The benchmark matrix is an immutable configuration structure: the scene
//! list, the offset table, the variant list, the two renderers and the
//! iteration counters. It is either the compiled-in default or loaded from a
//! TOML file, and is resolved once into [`MatrixTables`] before any run starts.
//!
//! 基准矩阵是一个不可变的配置结构：场景列表、偏移表、变体列表、两个渲染器以及迭代计数。
//! 它要么是编译时内置的默认值，要么从 TOML 文件加载，并在任何运行开始之前解析为 [`MatrixTables`]。

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::{RayDistribution, RendererRole, SceneSpec, Variant};
use crate::infra::t;

/// A renderer executable taking part in the comparison.
/// 参与比较的渲染器可执行文件。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RendererConfig {
    /// Display name used in logs / 日志中使用的显示名称
    pub name: String,
    /// Path to the executable; `~` and environment variables are expanded.
    /// 可执行文件路径；会展开 `~` 和环境变量。
    pub executable: String,
}

impl RendererConfig {
    fn new(name: &str, executable: &str) -> Self {
        Self {
            name: name.to_string(),
            executable: executable.to_string(),
        }
    }
}

/// Near / far offsets of one scene.
/// 一个场景的近 / 远偏移。
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SceneOffsets {
    pub tmin: f64,
    /// Far bound for the ambient-occlusion workload / 环境光遮蔽负载的远距离上限
    pub ao_tmax: f64,
}

/// The whole benchmark matrix as written in `BenchMatrix.toml`.
/// 写在 `BenchMatrix.toml` 中的整个基准矩阵。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BenchMatrix {
    /// The language for console messages (e.g. "en", "zh-CN").
    /// 控制台消息的语言（例如 "en", "zh-CN"）。
    #[serde(default = "default_language")]
    pub language: String,
    /// Timed iterations per run, passed as `-bench`.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Warm-up iterations per run, passed as `-warmup`.
    #[serde(default = "default_warmup")]
    pub warmup: u32,
    /// Directory holding one sub-directory per scene.
    /// 每个场景各有一个子目录的根目录。
    #[serde(default = "default_scenes_root")]
    pub scenes_root: PathBuf,
    /// Scene names in generation order / 按生成顺序排列的场景名称
    pub scenes: Vec<String>,
    /// Variant flag strings in generation order, e.g. `"-w 4 -p"`.
    /// 按生成顺序排列的变体标志字符串，例如 `"-w 4 -p"`。
    pub variants: Vec<String>,
    #[serde(default = "default_distributions")]
    pub distributions: Vec<RayDistribution>,
    pub reference: RendererConfig,
    pub candidate: RendererConfig,
    /// Offsets keyed by scene name / 按场景名称索引的偏移
    pub offsets: BTreeMap<String, SceneOffsets>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_iterations() -> u32 {
    50
}

fn default_warmup() -> u32 {
    10
}

fn default_scenes_root() -> PathBuf {
    PathBuf::from("scenes")
}

fn default_distributions() -> Vec<RayDistribution> {
    RayDistribution::ALL.to_vec()
}

impl Default for BenchMatrix {
    fn default() -> Self {
        let offsets = [
            ("sponza", 0.01, 10.0),
            ("crown", 0.01, 10.0),
            ("san-miguel", 0.01, 5.0),
            ("powerplant", 0.01, 1000.0),
        ];
        Self {
            language: default_language(),
            iterations: default_iterations(),
            warmup: default_warmup(),
            scenes_root: default_scenes_root(),
            reference: RendererConfig::new("embree", "../build/bin/bench_embree"),
            candidate: RendererConfig::new("rodent", "../build/bin/bench_traversal"),
            scenes: offsets.iter().map(|(name, ..)| name.to_string()).collect(),
            offsets: offsets
                .iter()
                .map(|&(name, tmin, ao_tmax)| (name.to_string(), SceneOffsets { tmin, ao_tmax }))
                .collect(),
            variants: ["-w 4", "-w 4 -p", "-w 4 -s", "-w 8", "-w 8 -p", "-w 8 -s"]
                .iter()
                .map(|v| v.to_string())
                .collect(),
            distributions: default_distributions(),
        }
    }
}

/// The validated, resolved tables the generator iterates over.
/// Built once per process and never mutated afterwards.
///
/// 生成器迭代的、经过验证和解析的表。
/// 每个进程构建一次，之后不再修改。
#[derive(Debug, Clone)]
pub struct MatrixTables {
    pub scenes: Vec<SceneSpec>,
    pub variants: Vec<Variant>,
    pub distributions: Vec<RayDistribution>,
    pub scenes_root: PathBuf,
    pub reference_executable: PathBuf,
    pub candidate_executable: PathBuf,
    pub iterations: u32,
    pub warmup: u32,
}

impl MatrixTables {
    pub fn executable(&self, role: RendererRole) -> &Path {
        match role {
            RendererRole::Reference => &self.reference_executable,
            RendererRole::Candidate => &self.candidate_executable,
        }
    }
}

impl BenchMatrix {
    /// Validates the matrix definition and resolves it into [`MatrixTables`].
    ///
    /// Every error returned here is a broken precondition: a scene without an
    /// offset entry, a variant string that cannot be split, or an empty axis.
    ///
    /// 验证矩阵定义并将其解析为 [`MatrixTables`]。
    /// 此处返回的每个错误都表示前置条件被破坏。
    pub fn resolve(&self) -> Result<MatrixTables> {
        if self.scenes.is_empty() {
            bail!(t!("config.no_scenes").to_string());
        }
        if self.variants.is_empty() {
            bail!(t!("config.no_variants").to_string());
        }
        if self.distributions.is_empty() {
            bail!(t!("config.no_distributions").to_string());
        }

        let scenes = self
            .scenes
            .iter()
            .map(|name| {
                self.offsets
                    .get(name)
                    .map(|o| SceneSpec::new(name.clone(), o.tmin, o.ao_tmax))
                    .ok_or_else(|| {
                        anyhow::anyhow!(t!("config.missing_offsets", scene = name).to_string())
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let variants = self
            .variants
            .iter()
            .map(|label| {
                Variant::parse(label).ok_or_else(|| {
                    anyhow::anyhow!(t!("config.invalid_variant", variant = label).to_string())
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(MatrixTables {
            scenes,
            variants,
            distributions: self.distributions.clone(),
            scenes_root: self.scenes_root.clone(),
            reference_executable: expand_executable(&self.reference.executable)?,
            candidate_executable: expand_executable(&self.candidate.executable)?,
            iterations: self.iterations,
            warmup: self.warmup,
        })
    }
}

fn expand_executable(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw)
        .with_context(|| format!("Failed to expand executable path: {raw}"))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Loads a benchmark matrix from a TOML file.
/// 从 TOML 文件加载基准矩阵。
pub fn load_bench_matrix(path: &Path) -> Result<BenchMatrix> {
    let content = fs::read_to_string(path)
        .with_context(|| t!("config.read_failed", path = path.display()).to_string())?;
    toml::from_str(&content)
        .with_context(|| t!("config.parse_failed", path = path.display()).to_string())
}
