use std::io;

use log::{debug, info, warn};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

use crate::{
    error::RequestError,
    wire::{EDGE_RECORD_BYTES, HEADER_BYTES},
};

/// Accept loop. Every connection carries exactly one request and receives
/// exactly one reply. A failed request ends its own connection only, the
/// listener keeps accepting.
pub async fn serve(listener: TcpListener) -> io::Result<()> {
    info!("listening on {}", listener.local_addr()?);

    loop {
        let (stream, peer) = listener.accept().await?;
        tokio::spawn(async move {
            debug!("connection from {}", peer);
            if let Err(error) = handle_connection(stream).await {
                warn!("request from {} failed: {}", peer, error);
            }
        });
    }
}

/// Frames the request by its header-declared length, then hands the bytes to
/// the same decode path the synchronous solve uses.
async fn handle_connection(mut stream: TcpStream) -> Result<(), RequestError> {
    let mut request = vec![0u8; HEADER_BYTES];
    stream
        .read_exact(&mut request)
        .await
        .map_err(RequestError::from_read)?;

    let number_of_edges = u16::from_be_bytes([request[4], request[5]]) as usize;
    request.resize(HEADER_BYTES + EDGE_RECORD_BYTES * number_of_edges, 0);
    stream
        .read_exact(&mut request[HEADER_BYTES..])
        .await
        .map_err(RequestError::from_read)?;

    let response = crate::solve(&mut request.as_slice())?;
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await?;

    Ok(())
}
