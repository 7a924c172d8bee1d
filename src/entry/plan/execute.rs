use std::sync::Arc;

use crate::domain::run::RunConfig;
use crate::error::AppResult;
use crate::http::{ReqwestSessionFactory, execute_run};
use crate::metrics::RequestLog;
use crate::system::print_summary;

pub(crate) async fn execute_plan(config: RunConfig) -> AppResult<()> {
    let log = Arc::new(RequestLog::console());
    let summary = execute_run(&config, &ReqwestSessionFactory, log).await?;
    print_summary(&summary);
    Ok(())
}
