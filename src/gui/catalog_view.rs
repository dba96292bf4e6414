use super::formatters::format_price;
use super::state::AppState;
use super::types::Message;
use crate::catalog::{resolve_image, CatalogItem};
use iced::{
	alignment::Horizontal,
	theme,
	widget::{button, column, container, image, row, scrollable, Column, Space, Text},
	Alignment, Color, Element, Length,
};

pub trait CatalogRenderer {
	fn catalog_screen(&self) -> Element<Message>;
	fn catalog_card<'a>(&'a self, item: &'a CatalogItem) -> Element<'a, Message>;
}

impl CatalogRenderer for AppState {
	fn catalog_screen(&self) -> Element<Message> {
		let header = container(
			row![
				column![
					Text::new("Pulse Robot").size(30),
					Text::new("Conheça nossos robôs humanoides disponíveis para compra").size(16),
				]
					.width(Length::Fill),
				button(Text::new("Atualizar").size(16))
					.on_press(Message::RefreshCatalog)
					.style(theme::Button::Secondary)
					.padding(10),
				button(Text::new("Área Administrativa").size(16))
					.on_press(Message::ShowAdmin)
					.style(theme::Button::Primary)
					.padding(10),
			]
				.spacing(12)
				.align_items(Alignment::Center)
		)
			.style(theme::Container::Box)
			.padding(15);

		let body: Element<Message> = if self.catalog.loading {
			centered_notice("Carregando robôs...", Color::from_rgb(0.5, 0.5, 0.5))
		} else if let Some(error) = &self.catalog.error {
			centered_notice(error, Color::from_rgb(0.9, 0.2, 0.2))
		} else if self.catalog.items.is_empty() {
			centered_notice(
				"Nenhum robô disponível para venda no momento.",
				Color::from_rgb(0.5, 0.5, 0.5),
			)
		} else {
			let cards = self.catalog.items.iter().map(|item| self.catalog_card(item));
			Column::with_children(cards).spacing(16).into()
		};

		column![
			header,
			scrollable(container(body).width(Length::Fill).padding(10)).height(Length::Fill),
		]
			.spacing(12)
			.into()
	}

	fn catalog_card<'a>(&'a self, item: &'a CatalogItem) -> Element<'a, Message> {
		let robot = &item.robot.data;
		let picture = image(image::Handle::from_path(resolve_image(robot, &self.config.assets_dir)))
			.width(Length::Fixed(220.0))
			.height(Length::Fixed(220.0));

		let specs = column![
			Text::new(format!("Altura: {}", robot.height)).size(14),
			Text::new(format!("Peso: {}", robot.weight)).size(14),
			Text::new(format!("Capacidade: {}", robot.capacity)).size(14),
			Text::new(format!("Autonomia: {}", robot.uptime)).size(14),
			Text::new(format!("Locomoção: {}", robot.movement)).size(14),
		]
			.spacing(4);

		let features = Column::with_children(
			robot
				.features
				.iter()
				.filter(|feature| !feature.is_empty())
				.map(|feature| -> Element<Message> { Text::new(format!("• {}", feature)).size(14).into() }),
		)
			.spacing(2);

		container(
			row![
				picture,
				column![
					Text::new(format!("{} {}", robot.model, robot.version)).size(22),
					Text::new(robot.description.as_str()).size(15),
					row![specs.width(Length::FillPortion(1)), features.width(Length::FillPortion(1))]
						.spacing(12),
					row![
						Text::new(format_price(item.price))
							.size(24)
							.style(theme::Text::Color(Color::from_rgb(0.1, 0.5, 0.9)))
							.width(Length::Fill),
						button(Text::new("Mais Detalhes").horizontal_alignment(Horizontal::Center))
							.on_press(Message::CatalogActionPressed)
							.style(theme::Button::Secondary)
							.padding(10),
						button(Text::new("Comprar Agora").horizontal_alignment(Horizontal::Center))
							.on_press(Message::CatalogActionPressed)
							.style(theme::Button::Primary)
							.padding(10),
					]
						.spacing(10)
						.align_items(Alignment::Center),
				]
					.spacing(10)
					.width(Length::Fill),
			]
				.spacing(20)
				.align_items(Alignment::Center)
		)
			.style(theme::Container::Box)
			.padding(16)
			.width(Length::Fill)
			.into()
	}
}

fn centered_notice(message: &str, color: Color) -> Element<Message> {
	column![
		Space::with_height(Length::Fixed(40.0)),
		container(
			Text::new(message)
				.size(20)
				.style(theme::Text::Color(color))
				.horizontal_alignment(Horizontal::Center)
		)
			.width(Length::Fill)
			.center_x(),
	]
		.into()
}
