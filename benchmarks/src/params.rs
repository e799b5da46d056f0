//! Simulator parameters shared by every job of a batch.

use serde::Deserialize;

/// System, CPU, cache and memory configuration handed to the simulator.
///
/// Sizes, clocks and voltages are kept as the simulator's own strings (`"32kB"`, `"4GHz"`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimParams {
    pub sys_voltage: String,
    pub sys_clock: String,
    pub cpu_clock: String,
    pub cpu_type: String,
    pub cache_line_size: u32,

    pub caches: bool,
    pub l2cache: bool,
    pub l1i: CacheParams,
    pub l1d: CacheParams,
    pub l2: CacheParams,
    pub l3: Option<CacheParams>,

    pub mem_type: String,
    pub mem_size: String,
    pub mem_channels: u32,
    pub mem_ranks: u32,

    pub max_insts: u64,
    /// Restore from the SimPoint checkpoint. When off, warm up and fast-forward instead.
    pub at_instruction: bool,
    pub warmup_insts: u64,
    pub fast_forward: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheParams {
    pub size: String,
    pub assoc: u32,
}

impl CacheParams {
    pub fn new(size: &str, assoc: u32) -> Self {
        Self {
            size: size.to_string(),
            assoc,
        }
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            sys_voltage: "1.0V".into(),
            sys_clock: "4GHz".into(),
            cpu_clock: "4GHz".into(),
            cpu_type: "DerivO3CPU".into(),
            cache_line_size: 64,
            caches: true,
            l2cache: true,
            l1i: CacheParams::new("32kB", 2),
            l1d: CacheParams::new("64kB", 2),
            l2: CacheParams::new("2MB", 4),
            l3: None,
            mem_type: "DDR4_2400_8x8".into(),
            mem_size: "8GB".into(),
            mem_channels: 1,
            mem_ranks: 2,
            max_insts: 20_000_000,
            at_instruction: true,
            warmup_insts: 2_000_000,
            fast_forward: 2_000_000,
        }
    }
}

impl SimParams {
    /// Render as `se.py` flags.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            format!("--cpu-type={}", self.cpu_type),
            format!("--restore-with-cpu={}", self.cpu_type),
            format!("--sys-voltage={}", self.sys_voltage),
            format!("--sys-clock={}", self.sys_clock),
            format!("--cpu-clock={}", self.cpu_clock),
            format!("--cacheline_size={}", self.cache_line_size),
            format!("--mem-type={}", self.mem_type),
            format!("--mem-size={}", self.mem_size),
            format!("--mem-channels={}", self.mem_channels),
            format!("--mem-ranks={}", self.mem_ranks),
        ];
        if self.caches {
            args.push("--caches".into());
            args.push(format!("--l1i_size={}", self.l1i.size));
            args.push(format!("--l1i_assoc={}", self.l1i.assoc));
            args.push(format!("--l1d_size={}", self.l1d.size));
            args.push(format!("--l1d_assoc={}", self.l1d.assoc));
        }
        if self.l2cache {
            args.push("--l2cache".into());
            args.push(format!("--l2_size={}", self.l2.size));
            args.push(format!("--l2_assoc={}", self.l2.assoc));
        }
        if let Some(l3) = &self.l3 {
            args.push(format!("--l3_size={}", l3.size));
            args.push(format!("--l3_assoc={}", l3.assoc));
        }
        args.push(format!("--maxinsts={}", self.max_insts));
        args
    }
}
