use crate::app::PdfStackApp;
use crate::message::Message;
use crate::models::MergeControl;
use crate::ops;
use iced::Task;

pub fn handle_message(app: &mut PdfStackApp, message: Message) -> Task<Message> {
    match message {
        Message::PickFiles => Task::perform(
            async {
                let files = rfd::AsyncFileDialog::new()
                    .add_filter("PDF", &["pdf"])
                    .pick_files()
                    .await;
                files
                    .map(|files| files.iter().map(|f| f.path().to_path_buf()).collect())
                    .unwrap_or_default()
            },
            Message::FilesPicked,
        ),
        Message::FilesPicked(paths) => {
            if !paths.is_empty() {
                app.files.extend(paths);
                app.merge_control = MergeControl::Confirm;
            }
            Task::none()
        }
        Message::MoveEntryUp(idx) => {
            app.move_entry_up(idx);
            Task::none()
        }
        Message::MoveEntryDown(idx) => {
            app.move_entry_down(idx);
            Task::none()
        }
        Message::RemoveEntry(idx) => {
            app.remove_entry(idx);
            Task::none()
        }
        Message::ConfirmMerge => {
            if app.files.is_empty() {
                return app.update(Message::PickFiles);
            }

            let inputs = app.files.clone();
            Task::perform(
                async move {
                    let file = rfd::AsyncFileDialog::new()
                        .add_filter("PDF", &["pdf"])
                        .set_file_name("merged.pdf")
                        .save_file()
                        .await?;
                    let output = file.path().to_path_buf();

                    let result = tokio::task::spawn_blocking(move || {
                        ops::merge_files(&inputs, &output).map_err(|e| e.to_string())
                    })
                    .await
                    .unwrap_or_else(|e| Err(format!("Merge task failed: {e}")));
                    Some(result)
                },
                Message::MergeFinished,
            )
        }
        Message::MergeFinished(result) => {
            match result {
                Some(Ok(outcome)) => {
                    tracing::info!(
                        files = outcome.files_merged,
                        pages = outcome.total_pages,
                        output = %outcome.output.display(),
                        "merge complete"
                    );
                    app.status_message = Some(format!(
                        "Merged {} files into {} pages.",
                        outcome.files_merged, outcome.total_pages
                    ));
                    app.output_path = Some(outcome.output);
                    app.files.clear();
                    app.merge_control = MergeControl::Idle;
                }
                Some(Err(e)) => {
                    tracing::error!("merge failed: {e}");
                    app.status_message = Some(format!("Merge failed: {e}"));
                }
                None => {}
            }
            Task::none()
        }
        Message::SplitPdf => {
            let prefix = app.split_prefix.clone();
            Task::perform(
                async move {
                    let file = rfd::AsyncFileDialog::new()
                        .add_filter("PDF", &["pdf"])
                        .pick_file()
                        .await?;
                    let dir = rfd::AsyncFileDialog::new().pick_folder().await?;
                    let input = file.path().to_path_buf();
                    let out_dir = dir.path().to_path_buf();

                    let result = tokio::task::spawn_blocking(move || {
                        ops::split_file(&input, &out_dir, &prefix).map_err(|e| e.to_string())
                    })
                    .await
                    .unwrap_or_else(|e| Err(format!("Split task failed: {e}")));
                    Some(result)
                },
                Message::SplitFinished,
            )
        }
        Message::SplitFinished(result) => {
            match result {
                Some(Ok(outcome)) => {
                    tracing::info!(
                        pages = outcome.files_written,
                        dir = %outcome.dir.display(),
                        "split complete"
                    );
                    app.status_message = Some(format!(
                        "Split into {} pages in {}.",
                        outcome.files_written,
                        outcome.dir.display()
                    ));
                }
                Some(Err(e)) => {
                    tracing::error!("split failed: {e}");
                    app.status_message = Some(format!("Split failed: {e}"));
                }
                None => {}
            }
            Task::none()
        }
        Message::PrefixChanged(prefix) => {
            app.split_prefix = prefix;
            Task::none()
        }
        Message::OpenResult => {
            match app.output_path.as_ref() {
                Some(path) if path.exists() => {
                    if let Err(e) = open::that(path) {
                        tracing::error!("failed to open {}: {e}", path.display());
                        app.status_message =
                            Some(format!("Could not open {}: {e}", path.display()));
                    }
                }
                _ => app.status_message = Some("File not found.".to_string()),
            }
            Task::none()
        }
        Message::ClearStatus => {
            app.status_message = None;
            Task::none()
        }
    }
}
