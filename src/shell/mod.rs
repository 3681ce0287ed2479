//! Hosts for the products view: the terminal renderer and the branding shared with
//! the web pages.

pub mod terminal;

/// Static machine listing shown next to the live pricing table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleMachine {
    pub machine_type: &'static str,
    pub cpus: u32,
    pub memory_gb: u32,
}

/// Branding and static display data owned by the shell.
#[derive(Clone, Debug)]
pub struct Shell {
    pub title: &'static str,
    pub sample_columns: [&'static str; 3],
    pub sample_machines: Vec<SampleMachine>,
}

impl Default for Shell {
    fn default() -> Self {
        Self {
            title: "Banzai Cloud Telescopes",
            sample_columns: ["Machine type", "vCPUs", "Memory (GB)"],
            sample_machines: vec![
                SampleMachine { machine_type: "m5.large", cpus: 4, memory_gb: 8 },
                SampleMachine { machine_type: "m5.xlarge", cpus: 8, memory_gb: 16 },
            ],
        }
    }
}
