use super::formatters::{or_dash, toast_color};
use super::panel::{PanelMessage, PanelState, Status};
use super::robot_view::RobotViewRenderer;
use super::state::AppState;
use super::types::{Message, Tab};
use crate::models::contact::Contact;
use crate::models::testimonial::{Testimonial, TestimonialField};
use crate::models::waitlist::WaitlistEntry;
use crate::models::{Entry, Resource};
use crate::utils::csv_exporter::format_created_at;
use iced::{
	alignment::Horizontal,
	theme,
	widget::{button, column, container, row, scrollable, text_input, Column, Row, Rule, Space, Text},
	Alignment, Color, Element, Length,
};

pub trait DashboardRenderer {
	fn dashboard(&self) -> Element<Message>;
	fn dashboard_header(&self) -> Element<Message>;
	fn tab_selector(&self) -> Element<Message>;
	fn toast_bar(&self) -> Element<Message>;
	fn testimonials_panel(&self) -> Element<Message>;
	fn contacts_panel(&self) -> Element<Message>;
	fn waitlist_panel(&self) -> Element<Message>;
}

impl DashboardRenderer for AppState {
	fn dashboard(&self) -> Element<Message> {
		let panel = match self.current_tab {
			Tab::Robots => self.robots_panel(),
			Tab::Testimonials => self.testimonials_panel(),
			Tab::Contacts => self.contacts_panel(),
			Tab::Waitlist => self.waitlist_panel(),
		};

		column![
			self.dashboard_header(),
			self.tab_selector(),
			scrollable(
				container(panel)
					.width(Length::Fill)
					.padding(10)
			)
				.height(Length::Fill),
		]
			.spacing(12)
			.into()
	}

	fn dashboard_header(&self) -> Element<Message> {
		let greeting = format!("Olá, {}", self.admin_user.as_deref().unwrap_or("admin"));

		container(
			row![
				Text::new("Painel Administrativo").size(26),
				Space::with_width(Length::Fill),
				Text::new(greeting).size(16),
				button(Text::new("Ver Site").size(16))
					.on_press(Message::ShowCatalog)
					.style(theme::Button::Secondary)
					.padding(10),
				button(Text::new("Sair").size(16))
					.on_press(Message::Logout)
					.style(theme::Button::Destructive)
					.padding(10),
			]
				.spacing(12)
				.align_items(Alignment::Center)
		)
			.style(theme::Container::Box)
			.padding(15)
			.into()
	}

	fn tab_selector(&self) -> Element<Message> {
		let tabs = Tab::ALL.iter().map(|tab| -> Element<Message> {
			button(Text::new(tab.to_string()).size(16))
				.style(if *tab == self.current_tab {
					theme::Button::Primary
				} else {
					theme::Button::Secondary
				})
				.on_press(Message::TabSelected(*tab))
				.padding(12)
				.into()
		});

		container(Row::with_children(tabs).spacing(12))
			.style(theme::Container::Box)
			.padding(15)
			.into()
	}

	fn toast_bar(&self) -> Element<Message> {
		let toasts = self.toasts.iter().map(|toast| -> Element<Message> {
			container(
				row![
					Text::new(toast.text.as_str())
						.size(15)
						.style(theme::Text::Color(toast_color(toast.level)))
						.width(Length::Fill),
					button(Text::new("×").size(16))
						.on_press(Message::DismissToast(toast.id))
						.style(theme::Button::Text)
						.padding(4),
				]
					.align_items(Alignment::Center)
			)
				.style(theme::Container::Box)
				.padding(10)
				.width(Length::Fixed(420.0))
				.into()
		});

		container(Column::with_children(toasts).spacing(6))
			.width(Length::Fill)
			.align_x(Horizontal::Right)
			.into()
	}

	fn testimonials_panel(&self) -> Element<Message> {
		let panel = &self.testimonials;
		let mut content = Column::new()
			.spacing(12)
			.push(section_header::<Testimonial>(
				Some(("Adicionar Depoimento", PanelMessage::StartCreate)),
				None,
			));

		if let Some(draft) = panel.draft() {
			content = content.push(testimonial_form(
				"Novo Depoimento",
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
					Some(buffer) if buffer.id == entry.id => testimonial_form(
						"Editar Depoimento",
						&buffer.data,
						PanelMessage::EditChanged,
						PanelMessage::SaveEdit,
						PanelMessage::CancelEdit,
					),
					_ => testimonial_card(entry),
				};
				list.push(card)
			}),
		};

		Element::from(content).map(Message::Testimonials)
	}

	fn contacts_panel(&self) -> Element<Message> {
		let panel = &self.contacts;
		let mut content = Column::new()
			.spacing(12)
			.push(section_header::<Contact>(None, None));

		if let Some(bar) = delete_bar(panel) {
			content = content.push(bar);
		}

		content = match panel_notice(panel) {
			Some(notice) => content.push(notice),
			None => panel
				.items
				.iter()
				.fold(content, |list, entry| list.push(contact_card(entry))),
		};

		Element::from(content).map(Message::Contacts)
	}

	fn waitlist_panel(&self) -> Element<Message> {
		let panel = &self.waitlist;
		let export: Element<Message> = button(
			Text::new(if self.exporting { "Exportando..." } else { "Exportar CSV" }).size(16),
		)
			.on_press_maybe((!self.exporting).then_some(Message::ExportWaitlist))
			.style(theme::Button::Positive)
			.padding(10)
			.into();

		let mut content = Column::new()
			.spacing(12)
			.push(row![
				Element::from(section_header::<WaitlistEntry>(None, None)).map(Message::Waitlist),
				export,
			]
				.spacing(12)
				.align_items(Alignment::Center));

		let mut rows = Column::new().spacing(12);
		if let Some(bar) = delete_bar(panel) {
			rows = rows.push(bar);
		}
		rows = match panel_notice(panel) {
			Some(notice) => rows.push(notice),
			None => panel
				.items
				.iter()
				.fold(rows, |list, entry| list.push(waitlist_card(entry))),
		};

		content = content.push(Element::from(rows).map(Message::Waitlist));
		content.into()
	}
}

/// Panel title with an optional primary action.
pub(super) fn section_header<'a, T: Resource>(
	action: Option<(&'static str, PanelMessage<T>)>,
	subtitle: Option<String>,
) -> Element<'a, PanelMessage<T>> {
	let mut title = Column::new()
		.spacing(4)
		.push(Text::new(T::TEXT.title).size(22));
	if let Some(subtitle) = subtitle {
		title = title.push(Text::new(subtitle).size(14));
	}

	let mut header = Row::new()
		.push(title.width(Length::Fill))
		.align_items(Alignment::Center);
	if let Some((label, message)) = action {
		header = header.push(
			button(Text::new(label).size(16))
				.on_press(message)
				.style(theme::Button::Primary)
				.padding(10),
		);
	}
	header.into()
}

/// Loading, error and empty placeholders; `None` once there are rows to show.
pub(super) fn panel_notice<'a, T: Resource>(panel: &'a PanelState<T>) -> Option<Element<'a, PanelMessage<T>>> {
	let (message, color) = match &panel.status {
		Status::Loading => (T::TEXT.loading, Color::from_rgb(0.5, 0.5, 0.5)),
		Status::Failed(message) => (message.as_str(), Color::from_rgb(0.9, 0.2, 0.2)),
		Status::Ready if panel.items.is_empty() => (T::TEXT.empty, Color::from_rgb(0.5, 0.5, 0.5)),
		Status::Ready => return None,
	};

	Some(
		container(
			Text::new(message)
				.size(18)
				.style(theme::Text::Color(color))
				.horizontal_alignment(Horizontal::Center),
		)
			.width(Length::Fill)
			.padding(40)
			.center_x()
			.into(),
	)
}

pub(super) fn delete_bar<'a, T: Resource>(panel: &PanelState<T>) -> Option<Element<'a, PanelMessage<T>>> {
	panel.pending_delete.as_ref()?;

	Some(
		container(
			row![
				Text::new(T::TEXT.confirm_delete).size(16).width(Length::Fill),
				button(Text::new("Cancelar"))
					.on_press(PanelMessage::DeleteCancelled)
					.style(theme::Button::Secondary)
					.padding(8),
				button(Text::new("Excluir"))
					.on_press(PanelMessage::DeleteConfirmed)
					.style(theme::Button::Destructive)
					.padding(8),
			]
				.spacing(8)
				.align_items(Alignment::Center)
		)
			.style(theme::Container::Box)
			.padding(12)
			.into(),
	)
}

pub(super) fn labeled_input<'a, F, M>(
	label: &'static str,
	value: &str,
	field: F,
	on_change: fn(F, String) -> M,
) -> Element<'a, M>
where
	F: Clone + 'a,
	M: Clone + 'a,
{
	column![
		Text::new(label).size(14),
		text_input(label, value)
			.on_input(move |value| on_change(field.clone(), value))
			.padding(10),
	]
		.spacing(4)
		.width(Length::Fill)
		.into()
}

/// Save/cancel row shared by every form.
pub(super) fn form_actions<'a, M: Clone + 'a>(submit_label: &'static str, submit: M, cancel: M) -> Element<'a, M> {
	row![
		Space::with_width(Length::Fill),
		button(Text::new("Cancelar"))
			.on_press(cancel)
			.style(theme::Button::Secondary)
			.padding(10),
		button(Text::new(submit_label))
			.on_press(submit)
			.style(theme::Button::Primary)
			.padding(10),
	]
		.spacing(12)
		.into()
}

fn testimonial_form<'a>(
	title: &'static str,
	values: &Testimonial,
	on_change: fn(TestimonialField, String) -> PanelMessage<Testimonial>,
	submit: PanelMessage<Testimonial>,
	cancel: PanelMessage<Testimonial>,
) -> Element<'a, PanelMessage<Testimonial>> {
	container(
		column![
			Text::new(title).size(20),
			labeled_input("Depoimento", &values.content, TestimonialField::Content, on_change),
			row![
				labeled_input("Autor", &values.author, TestimonialField::Author, on_change),
				labeled_input("Cargo", &values.role, TestimonialField::Role, on_change),
				labeled_input("Empresa", &values.company, TestimonialField::Company, on_change),
			]
				.spacing(12),
			form_actions("Salvar", submit, cancel),
		]
			.spacing(12)
	)
		.style(theme::Container::Box)
		.padding(16)
		.width(Length::Fill)
		.into()
}

fn testimonial_card(entry: &Entry<Testimonial>) -> Element<PanelMessage<Testimonial>> {
	let testimonial = &entry.data;
	let byline = format!("{}, {} - {}", testimonial.author, testimonial.role, testimonial.company);

	container(
		column![
			Text::new(format!("\"{}\"", testimonial.content)).size(15),
			row![
				Text::new(byline).size(14).width(Length::Fill),
				button(Text::new("Editar"))
					.on_press(PanelMessage::StartEdit(entry.id.clone()))
					.style(theme::Button::Secondary)
					.padding(8),
				button(Text::new("Excluir"))
					.on_press(PanelMessage::DeleteRequested(entry.id.clone()))
					.style(theme::Button::Destructive)
					.padding(8),
			]
				.spacing(8)
				.align_items(Alignment::Center),
		]
			.spacing(8)
	)
		.style(theme::Container::Box)
		.padding(12)
		.width(Length::Fill)
		.into()
}

fn contact_card(entry: &Entry<Contact>) -> Element<PanelMessage<Contact>> {
	let contact = &entry.data;

	container(
		column![
			row![
				column![
					Text::new(contact.name.as_str()).size(18),
					Text::new(contact.email.as_str()).size(14),
				]
					.width(Length::Fill),
				Text::new(format_created_at(contact.created_at.as_deref())).size(13),
			]
				.spacing(8)
				.align_items(Alignment::Center),
			Rule::horizontal(8),
			Text::new(contact.message.as_str()).size(14),
			row![
				Space::with_width(Length::Fill),
				button(Text::new("Responder por Email"))
					.on_press(PanelMessage::SendEmail(contact.email.clone()))
					.style(theme::Button::Primary)
					.padding(8),
				button(Text::new("Excluir"))
					.on_press(PanelMessage::DeleteRequested(entry.id.clone()))
					.style(theme::Button::Destructive)
					.padding(8),
			]
				.spacing(8),
		]
			.spacing(8)
	)
		.style(theme::Container::Box)
		.padding(12)
		.width(Length::Fill)
		.into()
}

fn waitlist_card(entry: &Entry<WaitlistEntry>) -> Element<PanelMessage<WaitlistEntry>> {
	let signup = &entry.data;
	let details = format!(
		"Telefone: {}  |  Empresa: {}  |  {}",
		or_dash(signup.phone.as_deref()),
		or_dash(signup.company.as_deref()),
		format_created_at(signup.created_at.as_deref()),
	);

	container(
		row![
			column![
				row![
					Text::new(signup.name.as_str()).size(17),
					container(Text::new(signup.kind_label()).size(12))
						.style(theme::Container::Box)
						.padding(4),
				]
					.spacing(8)
					.align_items(Alignment::Center),
				Text::new(signup.email.as_str()).size(14),
				Text::new(details).size(13),
			]
				.spacing(4)
				.width(Length::Fill),
			button(Text::new("Email"))
				.on_press(PanelMessage::SendEmail(signup.email.clone()))
				.style(theme::Button::Primary)
				.padding(8),
			button(Text::new("Excluir"))
				.on_press(PanelMessage::DeleteRequested(entry.id.clone()))
				.style(theme::Button::Destructive)
				.padding(8),
		]
			.spacing(8)
			.align_items(Alignment::Center)
	)
		.style(theme::Container::Box)
		.padding(12)
		.width(Length::Fill)
		.into()
}
