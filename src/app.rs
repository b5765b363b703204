use crate::{
    Result,
    api::PredictionClient,
    form::{FormController, RequestStatus},
    view::{self, Panel},
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

pub const QUIT_COMMAND: &str = ":quit";

/// Submits the current input, writing the loading panel before the call and
/// the final panel after it. Returns the status the submit ended in.
pub async fn submit_and_render<C, W>(
    controller: &mut FormController<C>,
    out: &mut W,
) -> Result<RequestStatus>
where
    C: PredictionClient,
    W: AsyncWrite + Unpin,
{
    if let Some(pending) = controller.begin_submit()? {
        // The request is resolved even when the loading panel cannot be shown.
        let shown = write_panel(out, &view::render(controller.state()).panel).await;
        controller.run(&pending).await?;
        shown?;
    }

    write_panel(out, &view::render(controller.state()).panel).await?;
    Ok(controller.status())
}

/// Analyses a single text and returns the final status.
pub async fn run_once<C, W>(
    controller: &mut FormController<C>,
    text: String,
    out: &mut W,
) -> Result<RequestStatus>
where
    C: PredictionClient,
    W: AsyncWrite + Unpin,
{
    controller.edit(text);
    let status = submit_and_render(controller, out).await?;
    out.flush().await?;
    Ok(status)
}

/// Treats every input line as an edit followed by a submit until end of
/// input or the quit command.
pub async fn run_interactive<C, R, W>(
    controller: &mut FormController<C>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    C: PredictionClient,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let header = view::render(controller.state());
    out.write_all(format!("{}\n{}\n", header.title, header.placeholder).as_bytes())
        .await?;

    let mut lines = input.lines();
    let mut submits = 0usize;
    loop {
        let prompt = view::render(controller.state());
        out.write_all(format!("[{}] > ", prompt.button_label).as_bytes())
            .await?;
        out.flush().await?;

        let Some(line) = lines.next_line().await? else {
            debug!("End of input");
            break;
        };
        if line.trim() == QUIT_COMMAND {
            break;
        }

        controller.edit(line);
        submit_and_render(controller, out).await?;
        submits += 1;
    }

    info!("Session finished after {} submits", submits);
    out.flush().await?;
    Ok(())
}

async fn write_panel<W: AsyncWrite + Unpin>(out: &mut W, panel: &Panel) -> Result<()> {
    if *panel != Panel::Empty {
        out.write_all(format!("{}\n", panel).as_bytes()).await?;
    }
    Ok(())
}
