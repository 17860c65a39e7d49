use anyhow::Context;
use clap::Parser;
use winepref_page::core::handler::envelope_json;
use winepref_page::core::server::PreviewServer;
use winepref_page::utils::{logger, validation::Validate};
use winepref_page::{DeploymentPage, PreviewConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = PreviewConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting winepref-page");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 驗證頁面內容 (所有託管連結必須是有效的 http/https URL)
    let page = DeploymentPage::default();
    if let Err(e) = page.validate() {
        tracing::error!("❌ Page validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 渲染模式:輸出文檔後直接結束
    if config.render || config.output_path.is_some() {
        let document = if config.json {
            envelope_json().context("serializing the response envelope")?
        } else {
            page.render()
        };

        match &config.output_path {
            Some(path) => {
                std::fs::write(path, &document).with_context(|| format!("writing {}", path))?;
                tracing::info!("📁 Document written to: {}", path);
                println!("📁 Document written to: {}", path);
            }
            None => println!("{}", document),
        }
        return Ok(());
    }

    // 合併旗標與配置文件,啟動預覽服務器
    let resolved = match config.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("❌ Failed to resolve preview configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let server = PreviewServer::bind(&resolved.host, resolved.port)
        .await
        .with_context(|| format!("binding {}:{}", resolved.host, resolved.port))?;
    let addr = server.local_addr()?;

    tracing::info!("✅ Preview server running on http://{}", addr);
    println!("✅ Preview server running on http://{}", addr);
    println!("   Every path and method returns the deployment notice page");

    server.serve().await?;

    Ok(())
}
