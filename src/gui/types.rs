use crate::catalog::CatalogItem;
use crate::models::contact::Contact;
use crate::models::robot::Robot;
use crate::models::testimonial::Testimonial;
use crate::models::waitlist::WaitlistEntry;
use super::panel::PanelMessage;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    Catalog,
    Login,
    Dashboard,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Tab {
    Robots,
    Testimonials,
    Contacts,
    Waitlist,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Robots, Tab::Testimonials, Tab::Contacts, Tab::Waitlist];
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tab::Robots => write!(f, "Robôs"),
            Tab::Testimonials => write!(f, "Depoimentos"),
            Tab::Contacts => write!(f, "Contatos"),
            Tab::Waitlist => write!(f, "Lista de Espera"),
        }
    }
}

/// The "available" selector of the robot forms.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Availability {
    Yes,
    No,
}

impl Availability {
    pub const ALL: [Availability; 2] = [Availability::Yes, Availability::No];

    pub fn from_flag(available: bool) -> Self {
        if available {
            Availability::Yes
        } else {
            Availability::No
        }
    }

    /// Form value understood by `Robot::set_field`.
    pub fn as_value(self) -> String {
        match self {
            Availability::Yes => "true".to_string(),
            Availability::No => "false".to_string(),
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Yes => write!(f, "Sim"),
            Availability::No => write!(f, "Não"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    ShowCatalog,
    ShowAdmin,
    TabSelected(Tab),

    // Public catalog
    CatalogLoaded(Result<Vec<CatalogItem>, String>),
    RefreshCatalog,
    CatalogActionPressed,

    // Login
    UsernameChanged(String),
    PasswordChanged(String),
    TogglePasswordVisibility,
    LoginSubmitted,
    LoginFinished(Result<String, String>),
    Logout,

    // Admin panels
    Robots(PanelMessage<Robot>),
    Testimonials(PanelMessage<Testimonial>),
    Contacts(PanelMessage<Contact>),
    Waitlist(PanelMessage<WaitlistEntry>),
    ExportWaitlist,
    WaitlistExported(Result<PathBuf, String>),

    // Notifications
    Tick,
    DismissToast(u64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::robot::RobotField;
    use crate::models::Resource;

    #[test]
    fn availability_round_trips_through_robot_form() {
        let mut robot = Robot::default();
        robot.set_field(RobotField::Available, Availability::No.as_value());
        assert_eq!(Availability::from_flag(robot.available), Availability::No);
        robot.set_field(RobotField::Available, Availability::Yes.as_value());
        assert_eq!(Availability::from_flag(robot.available), Availability::Yes);
    }
}
