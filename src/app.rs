// src/app.rs
use eframe::egui;
use egui_commonmark::CommonMarkCache;
use rfd::FileDialog;
use tracing::{debug, error, info};

use crate::client::BackendClient;
use crate::file::{export_file_name, FileHandler, SectionExportHandler};
use crate::state::{AppState, RunJob, RunRequest, MISSING_FILE_PROMPT};
use crate::ui::{dialog, results, upload, DownloadRequest, UploadAction};

pub struct ResumeApp {
    state: AppState,
    client: BackendClient,
    job: Option<RunJob>,
    markdown_cache: CommonMarkCache,
    export_handler: SectionExportHandler,
}

impl ResumeApp {
    pub fn new(client: BackendClient) -> Self {
        Self {
            state: AppState::new(),
            client,
            job: None,
            markdown_cache: CommonMarkCache::default(),
            export_handler: SectionExportHandler::new(),
        }
    }

    fn choose_file(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("PDF files", &["pdf"])
            .set_title("Select Resume");

        if let Some(path) = file_dialog.pick_file() {
            self.state.select_file(path);
        }
    }

    fn start_run(&mut self, ctx: &egui::Context) {
        match self.state.begin_run() {
            RunRequest::Started(path) => {
                info!(file = %path.display(), backend = self.client.base_url(), "starting analysis");
                let ctx = ctx.clone();
                self.job = Some(RunJob::spawn(self.client.clone(), path, move || {
                    ctx.request_repaint();
                }));
            }
            RunRequest::AlreadyRunning => {
                debug!("run requested while another is in flight; ignored");
            }
            RunRequest::MissingFile => {
                self.state.prompt = Some(MISSING_FILE_PROMPT.to_string());
            }
        }
    }

    fn poll_job(&mut self) {
        let Some(outcome) = self.job.as_ref().and_then(RunJob::poll) else {
            return;
        };
        self.job = None;
        self.state.finish_run(outcome);
    }

    fn download(&mut self, request: DownloadRequest) {
        let file_dialog = FileDialog::new()
            .set_file_name(export_file_name(&request.key))
            .add_filter("Text files", &["txt"])
            .set_title("Download Section");

        let Some(path) = file_dialog.save_file() else {
            return;
        };

        match self.export_handler.save(&request.payload, &path) {
            Ok(()) => info!(section = %request.key, path = %path.display(), "section saved"),
            Err(e) => {
                error!(section = %request.key, error = %e, "failed to save section");
                self.state.error_message = Some(format!("{:#}", e));
            }
        }
    }
}

impl eframe::App for ResumeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_job();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(format!("Backend: {}", self.client.base_url()));
            });
        });

        let mut action = UploadAction::None;
        let mut download = None;

        // Open modals block the form until dismissed.
        let form_enabled = !self.state.modal_open();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(form_enabled, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Resume AI Assistant");
                });
                ui.add_space(16.0);

                action = upload::show_upload_panel(ui, &self.state);

                ui.add_space(16.0);
                download = results::show_results_view(ui, &mut self.state, &mut self.markdown_cache);
            });
        });

        match action {
            UploadAction::ChooseFile => self.choose_file(),
            UploadAction::Run => self.start_run(ctx),
            UploadAction::None => {}
        }
        if let Some(request) = download {
            self.download(request);
        }

        dialog::show_message_window(ctx, "Resume Assistant", &mut self.state.prompt);
        dialog::show_message_window(ctx, "Error", &mut self.state.error_message);
    }
}
