use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::transcription::handler::submit_transcription,
        crate::modules::transcription::handler::get_job,
        crate::modules::transcription::handler::callback_echo,
    ),
    components(
        schemas(
            crate::modules::transcription::dto::TranscribeRequest,
            crate::modules::transcription::dto::TranscribeResponse,
            crate::modules::transcription::dto::JobResponse,
            crate::modules::transcription::dto::CallbackEchoRequest,
            crate::modules::transcription::dto::CallbackEchoResponse,
            crate::modules::transcription::model::ItemResult,
            crate::modules::transcription::model::JobStatus,
        )
    ),
    tags(
        (name = "Transcription", description = "Batch transcription jobs")
    )
)]
pub struct ApiDoc;
