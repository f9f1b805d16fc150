//! Plugin order command.

use std::path::Path;

use anyhow::Result;
use slua_plugins::{apply_rules, OrderRule, PluginDescriptor};

use crate::config::{load_config, SiteConfig};

/// Apply the configured ordering rules, then `extra`, to the configured plugins.
fn resolve_order(site: SiteConfig, extra: Option<OrderRule>) -> Vec<PluginDescriptor> {
    let mut plugins = site.plugins;
    let mut rules = site.plugin_order;
    rules.extend(extra);

    let moved = apply_rules(&mut plugins, &rules);
    tracing::debug!("{} of {} ordering rules moved a plugin", moved, rules.len());

    plugins
}

/// Run the plugins command.
pub fn run(config_path: &Path, extra: Option<OrderRule>) -> Result<()> {
    let site = load_config(config_path)?.site;

    if site.plugins.is_empty() {
        tracing::warn!("No plugins configured in [site] of {}", config_path.display());
        return Ok(());
    }

    let plugins = resolve_order(site, extra);

    tracing::info!("Plugin order:");
    for (index, plugin) in plugins.iter().enumerate() {
        tracing::info!("  {}. {}", index + 1, plugin.name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slua_plugins::Order;

    fn site(plugins: &[&str], rules: Vec<OrderRule>) -> SiteConfig {
        SiteConfig {
            plugins: plugins.iter().map(|p| PluginDescriptor::new(*p)).collect(),
            plugin_order: rules,
        }
    }

    fn names(plugins: &[PluginDescriptor]) -> Vec<&str> {
        plugins.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn applies_configured_rules() {
        let config = site(
            &["@tailwindcss/vite:scan", "vitepress", "git-changelog"],
            vec![OrderRule {
                plugin: "@tailwindcss/vite:scan".to_string(),
                order: Order::After,
                anchor: "vitepress".to_string(),
            }],
        );

        let plugins = resolve_order(config, None);

        assert_eq!(
            names(&plugins),
            vec!["vitepress", "@tailwindcss/vite:scan", "git-changelog"]
        );
    }

    #[test]
    fn extra_rule_runs_last() {
        let config = site(
            &["a", "b", "c"],
            vec![OrderRule {
                plugin: "a".to_string(),
                order: Order::After,
                anchor: "b".to_string(),
            }],
        );
        let extra = OrderRule {
            plugin: "c".to_string(),
            order: Order::Before,
            anchor: "b".to_string(),
        };

        let plugins = resolve_order(config, Some(extra));

        assert_eq!(names(&plugins), vec!["c", "b", "a"]);
    }

    #[test]
    fn unknown_names_leave_order_alone() {
        let config = site(
            &["a", "b"],
            vec![OrderRule {
                plugin: "ghost".to_string(),
                order: Order::Before,
                anchor: "a".to_string(),
            }],
        );

        let plugins = resolve_order(config, None);

        assert_eq!(names(&plugins), vec!["a", "b"]);
    }
}
