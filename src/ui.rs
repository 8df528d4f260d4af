use crate::app::PdfStackApp;
use crate::message::Message;
use crate::models::{self, MergeControl};
use iced::widget::{button, column, container, row, scrollable, text, text_input, Space};
use iced::{Alignment, Element, Length};

pub fn view(app: &PdfStackApp) -> Element<Message> {
    column![
        row![text("PDF Toolkit").size(24).width(Length::Fill)].padding(10),
        render_file_list(app),
        render_actions(app),
        render_status(app),
    ]
    .into()
}

fn render_file_list(app: &PdfStackApp) -> Element<Message> {
    if app.files.is_empty() {
        return container(text("No files queued. Use \"Merge PDFs\" to pick some."))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let last = app.files.len() - 1;
    let mut list = column![].spacing(4).padding(10);
    for (idx, path) in app.files.iter().enumerate() {
        let up = if idx > 0 {
            button("↑").on_press(Message::MoveEntryUp(idx))
        } else {
            button("↑")
        };
        let down = if idx < last {
            button("↓").on_press(Message::MoveEntryDown(idx))
        } else {
            button("↓")
        };

        list = list.push(
            row![
                text(format!("{}. {}", idx + 1, models::display_name(path)))
                    .width(Length::Fill),
                up,
                down,
                button("×").on_press(Message::RemoveEntry(idx)),
            ]
            .spacing(5)
            .align_y(Alignment::Center),
        );
    }

    scrollable(list).height(Length::Fill).into()
}

fn render_actions(app: &PdfStackApp) -> Element<Message> {
    let merge_button = button(app.merge_control.label())
        .on_press(match app.merge_control {
            MergeControl::Idle => Message::PickFiles,
            MergeControl::Confirm => Message::ConfirmMerge,
        })
        .width(Length::Fill);

    let open_button = if app.output_path.is_some() {
        button("Open Merged PDF").on_press(Message::OpenResult)
    } else {
        button("Open Merged PDF")
    };

    column![
        merge_button,
        button("Split PDF")
            .on_press(Message::SplitPdf)
            .width(Length::Fill),
        text_input("Enter prefix for split files", &app.split_prefix)
            .on_input(Message::PrefixChanged),
        open_button.width(Length::Fill),
    ]
    .spacing(8)
    .padding(10)
    .into()
}

fn render_status(app: &PdfStackApp) -> Element<Message> {
    match &app.status_message {
        Some(msg) => row![
            text(msg).size(12).width(Length::Fill),
            button("×").on_press(Message::ClearStatus).padding(2),
        ]
        .padding(5)
        .align_y(Alignment::Center)
        .into(),
        None => Space::new().height(Length::Fixed(0.0)).into(),
    }
}
