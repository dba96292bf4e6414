use super::state::AppState;
use super::types::Message;
use iced::{
	alignment::Horizontal,
	theme,
	widget::{button, column, container, row, text_input, Space, Text},
	Alignment, Element, Length,
};

pub trait LoginRenderer {
	fn login_screen(&self) -> Element<Message>;
}

impl LoginRenderer for AppState {
	fn login_screen(&self) -> Element<Message> {
		let form = &self.login;

		let password = text_input("Digite sua senha", &form.password)
			.secure(!form.show_password)
			.padding(12)
			.width(Length::Fill);
		// Inputs lock while the credential check runs
		let (username, password) = if form.submitting {
			(text_input("Digite seu usuário", &form.username).padding(12), password)
		} else {
			(
				text_input("Digite seu usuário", &form.username)
					.on_input(Message::UsernameChanged)
					.on_submit(Message::LoginSubmitted)
					.padding(12),
				password
					.on_input(Message::PasswordChanged)
					.on_submit(Message::LoginSubmitted),
			)
		};

		let submit = button(
			Text::new(if form.submitting { "Entrando..." } else { "Entrar" })
				.size(16)
				.horizontal_alignment(Horizontal::Center)
				.width(Length::Fill),
		)
			.on_press_maybe((!form.submitting).then_some(Message::LoginSubmitted))
			.style(theme::Button::Primary)
			.padding(12)
			.width(Length::Fill);

		let card = container(
			column![
				Text::new("Área Administrativa").size(26),
				Text::new("Entre com suas credenciais para acessar o painel").size(14),
				Space::with_height(Length::Fixed(10.0)),
				Text::new("Usuário").size(14),
				username,
				Text::new("Senha").size(14),
				row![
					password,
					button(Text::new(if form.show_password { "Ocultar" } else { "Mostrar" }))
						.on_press(Message::TogglePasswordVisibility)
						.style(theme::Button::Secondary)
						.padding(12),
				]
					.spacing(8)
					.align_items(Alignment::Center),
				Space::with_height(Length::Fixed(10.0)),
				submit,
				button(Text::new("Voltar para o site").horizontal_alignment(Horizontal::Center).width(Length::Fill))
					.on_press(Message::ShowCatalog)
					.style(theme::Button::Text)
					.width(Length::Fill),
			]
				.spacing(8)
		)
			.style(theme::Container::Box)
			.padding(24)
			.width(Length::Fixed(420.0));

		container(card)
			.width(Length::Fill)
			.height(Length::Fill)
			.center_x()
			.center_y()
			.into()
	}
}
