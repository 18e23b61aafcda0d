use crate::host::PermissionProvider;
use crate::models::{immunity::ImmunityRule, player::Player};

/// Evaluates the configured immunity rules. Stateless; consulted once per death.
#[derive(Debug, Clone, Default)]
pub struct ImmunityGate {
    rules: Vec<ImmunityRule>,
}

impl ImmunityGate {
    pub fn new(rules: Vec<ImmunityRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ImmunityRule] {
        &self.rules
    }

    pub fn has_immunity(&self, permissions: &dyn PermissionProvider, player: &Player) -> bool {
        has_immunity(permissions, player, &self.rules)
    }
}

pub fn has_immunity(
    permissions: &dyn PermissionProvider,
    player: &Player,
    rules: &[ImmunityRule],
) -> bool {
    rules.iter().any(|rule| rule_matches(permissions, player, rule))
}

fn rule_matches(permissions: &dyn PermissionProvider, player: &Player, rule: &ImmunityRule) -> bool {
    match rule {
        ImmunityRule::Permission(flag) => permissions.has_permission(player, flag),
        ImmunityRule::Group(group) => permissions.in_group(player, group),
        // An empty override names nothing and never grants immunity.
        ImmunityRule::CommandOverride(command) if command.is_empty() => false,
        ImmunityRule::CommandOverride(command) => permissions.has_command_override(player, command),
    }
}
