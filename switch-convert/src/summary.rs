use serde::Serialize;

use crate::model::NetworkConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub vlans: usize,
    pub interfaces: usize,
    pub tagged_ports: usize,
    pub shutdown_ports: usize,
    pub device_lines: usize,
    pub output_lines: usize,
}

pub fn summarize(model: &NetworkConfig, output: &str) -> ConversionSummary {
    ConversionSummary {
        vlans: model.vlans.len(),
        interfaces: model.interfaces.len(),
        tagged_ports: model
            .interfaces
            .values()
            .filter(|i| !i.trunk_vlans.is_empty())
            .count(),
        shutdown_ports: model
            .interfaces
            .values()
            .filter(|i| i.shutdown.is_on())
            .count(),
        device_lines: model.device.len(),
        output_lines: output.lines().count(),
    }
}

pub fn render(summary: &ConversionSummary) -> String {
    format!(
        "convert_summary vlans={} interfaces={} tagged_ports={} shutdown_ports={} device_lines={} output_lines={}",
        summary.vlans,
        summary.interfaces,
        summary.tagged_ports,
        summary.shutdown_ports,
        summary.device_lines,
        summary.output_lines
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use crate::model::TriState;

    #[test]
    fn counts_model_and_output() {
        let mut model = NetworkConfig::new(Dialect::HpProCurve);
        model.vlan_mut("10");
        model.interface_mut("1").trunk_vlans = vec!["10".to_string()];
        model.interface_mut("2").shutdown = TriState::On;

        let summary = summarize(&model, "a\nb\nc");
        assert_eq!(
            render(&summary),
            "convert_summary vlans=1 interfaces=2 tagged_ports=1 shutdown_ports=1 device_lines=0 output_lines=3"
        );
    }
}
