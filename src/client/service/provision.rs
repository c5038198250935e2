//! Multi-step server creation wizard.

use crate::{
    client::service::validation::{FieldErrors, MIN_PASSWORD_LEN},
    model::{
        catalog::{OsTemplateDto, PlanDto},
        node::NodeDto,
        server::CreateServerDto,
    },
};

pub const CPU_RANGE: std::ops::RangeInclusive<u32> = 1..=16;
pub const MEMORY_RANGE: std::ops::RangeInclusive<u32> = 1..=64;
pub const STORAGE_RANGE: std::ops::RangeInclusive<u32> = 10..=1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Name,
    Node,
    Template,
    Plan,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        Self::Name,
        Self::Node,
        Self::Template,
        Self::Plan,
        Self::Review,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Name => "Server Name",
            Self::Node => "Node",
            Self::Template => "Operating System",
            Self::Plan => "Plan",
            Self::Review => "Review",
        }
    }

    /// 1-based position for the progress indicator.
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).map_or(0, |i| i + 1)
    }

    fn next(&self) -> Self {
        Self::ALL.get(self.number()).copied().unwrap_or(Self::Review)
    }

    fn previous(&self) -> Self {
        match self.number() {
            0 | 1 => Self::Name,
            n => Self::ALL[n - 2],
        }
    }
}

/// A custom size: cores, GB of memory, GB of storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resources {
    pub cpu: u32,
    pub memory: u32,
    pub storage: u32,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            cpu: 1,
            memory: 2,
            storage: 20,
        }
    }
}

/// Display price of a custom size: 5 per core, 2 per GB of memory, 0.1 per GB
/// of storage. Computed in tenths so whole-number inputs stay exact.
pub fn custom_price(resources: &Resources) -> f64 {
    let tenths = 50 * u64::from(resources.cpu)
        + 20 * u64::from(resources.memory)
        + u64::from(resources.storage);
    tenths as f64 / 10.0
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlanChoice {
    Predefined(String),
    Custom,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerWizard {
    pub step: WizardStep,
    pub name: String,
    pub password: String,
    /// Node name.
    pub node: Option<String>,
    /// OS template id.
    pub os_template: Option<String>,
    pub plan: Option<PlanChoice>,
    pub custom: Resources,
    plans: Vec<PlanDto>,
}

impl ServerWizard {
    /// Starts at the first step with the first entry of each catalogue preselected.
    pub fn new(nodes: &[NodeDto], templates: &[OsTemplateDto], plans: Vec<PlanDto>) -> Self {
        Self {
            step: WizardStep::Name,
            name: String::new(),
            password: String::new(),
            node: nodes.first().map(|n| n.name.clone()),
            os_template: templates.first().map(|t| t.id.clone()),
            plan: plans.first().map(|p| PlanChoice::Predefined(p.id.clone())),
            custom: Resources::default(),
            plans,
        }
    }

    pub fn plans(&self) -> &[PlanDto] {
        &self.plans
    }

    pub fn selected_plan(&self) -> Option<&PlanDto> {
        match &self.plan {
            Some(PlanChoice::Predefined(id)) => self.plans.iter().find(|p| &p.id == id),
            _ => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.plan == Some(PlanChoice::Custom)
    }

    /// Resources the server will get, if a size has been chosen.
    pub fn resources(&self) -> Option<Resources> {
        match &self.plan {
            Some(PlanChoice::Custom) => Some(self.custom),
            Some(PlanChoice::Predefined(_)) => self.selected_plan().map(|p| Resources {
                cpu: p.cpu,
                memory: p.memory,
                storage: p.storage,
            }),
            None => None,
        }
    }

    /// Monthly price shown to the user. The API decides the real price.
    pub fn price(&self) -> f64 {
        match &self.plan {
            Some(PlanChoice::Custom) => custom_price(&self.custom),
            Some(PlanChoice::Predefined(_)) => self.selected_plan().map_or(0.0, |p| p.price),
            None => 0.0,
        }
    }

    pub fn validate_step(&self, step: WizardStep) -> FieldErrors {
        let mut errors = FieldErrors::new();

        match step {
            WizardStep::Name => {
                let name = self.name.trim();
                if name.is_empty() {
                    errors.add("name", "Please enter a server name");
                } else if !name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
                {
                    errors.add(
                        "name",
                        "Only letters, numbers, hyphens and underscores are allowed",
                    );
                }

                if self.password.is_empty() {
                    errors.add("password", "Please enter a root password");
                } else if self.password.chars().count() < MIN_PASSWORD_LEN {
                    errors.add(
                        "password",
                        format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
                    );
                }
            }
            WizardStep::Node => {
                if self.node.is_none() {
                    errors.add("node", "Please select a node");
                }
            }
            WizardStep::Template => {
                if self.os_template.is_none() {
                    errors.add("os_template", "Please select an OS template");
                }
            }
            WizardStep::Plan => match &self.plan {
                None => errors.add("plan", "Please select a plan or create a custom configuration"),
                Some(PlanChoice::Predefined(_)) if self.selected_plan().is_none() => {
                    errors.add("plan", "Selected plan no longer exists")
                }
                Some(PlanChoice::Predefined(_)) => {}
                Some(PlanChoice::Custom) => {
                    check_range(&mut errors, "cpu", "CPU cores", self.custom.cpu, CPU_RANGE);
                    check_range(&mut errors, "memory", "Memory", self.custom.memory, MEMORY_RANGE);
                    check_range(&mut errors, "storage", "Storage", self.custom.storage, STORAGE_RANGE);
                }
            },
            WizardStep::Review => {}
        }

        errors
    }

    /// Advances when the current step is valid.
    pub fn next(&mut self) -> Result<WizardStep, FieldErrors> {
        let errors = self.validate_step(self.step);
        if !errors.is_empty() {
            return Err(errors);
        }

        self.step = self.step.next();
        Ok(self.step)
    }

    pub fn previous(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }

    /// Validates every step and builds the create request.
    pub fn build_request(&self) -> Result<CreateServerDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        for step in WizardStep::ALL {
            errors.merge(self.validate_step(step));
        }

        let (Some(node), Some(os_template), Some(resources)) =
            (&self.node, &self.os_template, self.resources())
        else {
            return Err(errors);
        };

        let plan_id = match &self.plan {
            Some(PlanChoice::Predefined(id)) => Some(id.clone()),
            _ => None,
        };

        errors.into_result(CreateServerDto {
            name: self.name.trim().to_string(),
            node: node.clone(),
            os_template: os_template.clone(),
            password: self.password.clone(),
            cpu: resources.cpu,
            memory: resources.memory,
            storage: resources.storage,
            plan_id,
        })
    }
}

fn check_range(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: u32,
    range: std::ops::RangeInclusive<u32>,
) {
    if !range.contains(&value) {
        errors.add(
            field,
            format!("{} must be between {} and {}", label, range.start(), range.end()),
        );
    }
}
