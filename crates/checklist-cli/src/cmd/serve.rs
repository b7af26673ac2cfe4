use anyhow::Result;

pub fn run(host: &str, port: u16) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind((host, port)).await?;
        let addr = listener.local_addr()?;
        println!("MCP checklist server → http://{addr}  (PID {})", std::process::id());

        tokio::select! {
            res = checklist_server::serve_on(listener) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
