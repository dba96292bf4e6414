use super::formatters::{availability_color, format_availability};
use super::panel::PanelMessage;
use super::state::AppState;
use super::types::{Availability, Message};
use super::views::{delete_bar, form_actions, labeled_input, panel_notice, section_header};
use crate::models::robot::{Robot, RobotField};
use crate::models::Entry;
use iced::{
    theme,
    widget::{button, column, container, pick_list, row, Column, Text},
    Alignment, Element, Length,
};

type RobotMessage = PanelMessage<Robot>;

pub trait RobotViewRenderer {
    fn robots_panel(&self) -> Element<Message>;
}

impl RobotViewRenderer for AppState {
    fn robots_panel(&self) -> Element<Message> {
        let panel = &self.robots;
        let subtitle = format!("{} robôs cadastrados", panel.items.len());
        let mut content = Column::new()
            .spacing(12)
            .push(section_header::<Robot>(
                Some(("Adicionar Robô", PanelMessage::StartCreate)),
                Some(subtitle),
            ));

        if let Some(draft) = panel.draft() {
            content = content.push(robot_form(
                "Novo Robô",
                draft,
                PanelMessage::DraftChanged,
                PanelMessage::SubmitCreate,
                PanelMessage::CancelCreate,
            ));
        }
        if let Some(bar) = delete_bar(panel) {
            content = content.push(bar);
        }

        content = match panel_notice(panel) {
            Some(notice) => content.push(notice),
            None => panel.items.iter().fold(content, |list, entry| {
                let card = match panel.edit_buffer() {
                    Some(buffer) if buffer.id == entry.id => robot_form(
                        "Editar Robô",
                        &buffer.data,
                        PanelMessage::EditChanged,
                        PanelMessage::SaveEdit,
                        PanelMessage::CancelEdit,
                    ),
                    _ => robot_card(entry),
                };
                list.push(card)
            }),
        };

        Element::from(content).map(Message::Robots)
    }
}

fn robot_form<'a>(
    title: &'static str,
    robot: &Robot,
    on_change: fn(RobotField, String) -> RobotMessage,
    submit: RobotMessage,
    cancel: RobotMessage,
) -> Element<'a, RobotMessage> {
    // Features are edited as one comma separated line
    let features = robot.features.join(", ");

    container(
        column![
            Text::new(title).size(20),
            row![
                labeled_input("Modelo", &robot.model, RobotField::Model, on_change),
                labeled_input("Versão", &robot.version, RobotField::Version, on_change),
            ]
            .spacing(12),
            row![
                labeled_input("Altura", &robot.height, RobotField::Height, on_change),
                labeled_input("Peso", &robot.weight, RobotField::Weight, on_change),
                labeled_input("Capacidade", &robot.capacity, RobotField::Capacity, on_change),
            ]
            .spacing(12),
            row![
                labeled_input("Autonomia", &robot.uptime, RobotField::Uptime, on_change),
                labeled_input("Locomoção", &robot.movement, RobotField::Movement, on_change),
            ]
            .spacing(12),
            labeled_input(
                "Recursos (separados por vírgula)",
                &features,
                RobotField::Features,
                on_change,
            ),
            labeled_input("Descrição", &robot.description, RobotField::Description, on_change),
            row![
                Text::new("Disponível").size(14),
                pick_list(
                    &Availability::ALL[..],
                    Some(Availability::from_flag(robot.available)),
                    move |choice: Availability| on_change(RobotField::Available, choice.as_value()),
                )
                .width(Length::Fixed(120.0))
                .padding(8),
            ]
            .spacing(12)
            .align_items(Alignment::Center),
            form_actions("Salvar", submit, cancel),
        ]
        .spacing(12)
    )
    .style(theme::Container::Box)
    .padding(16)
    .width(Length::Fill)
    .into()
}

fn robot_card(entry: &Entry<Robot>) -> Element<RobotMessage> {
    let robot = &entry.data;
    let specs = format!(
        "Altura: {}  |  Peso: {}  |  Capacidade: {}  |  Autonomia: {}  |  Locomoção: {}",
        robot.height, robot.weight, robot.capacity, robot.uptime, robot.movement
    );

    let mut details = Column::new()
        .spacing(6)
        .push(Text::new(specs).size(13))
        .push(Text::new(robot.description.as_str()).size(14));
    if !robot.features.is_empty() {
        details = details.push(Text::new(format!("Recursos: {}", robot.features.join(", "))).size(13));
    }

    container(
        column![
            row![
                column![
                    Text::new(format!("{} {}", robot.model, robot.version)).size(18),
                    Text::new(format_availability(robot.available))
                        .size(13)
                        .style(theme::Text::Color(availability_color(robot.available))),
                ]
                .width(Length::Fill),
                row![
                    button(Text::new("Editar"))
                        .on_press(PanelMessage::StartEdit(entry.id.clone()))
                        .style(theme::Button::Secondary)
                        .padding(8),
                    button(Text::new("Excluir"))
                        .on_press(PanelMessage::DeleteRequested(entry.id.clone()))
                        .style(theme::Button::Destructive)
                        .padding(8),
                ]
                .spacing(8),
            ]
            .align_items(Alignment::Center),
            details,
        ]
        .spacing(8)
    )
    .style(theme::Container::Box)
    .padding(12)
    .width(Length::Fill)
    .into()
}
