//! Deployment banner served at `/`.
//!
//! Everything except the runtime version and server time is fixed at build
//! time and rendered verbatim.

use chrono::{DateTime, Utc};

use crate::collectors::clock::server_time;
use crate::collectors::runtime::runtime_version;

pub const STACK_NAME: &str = "Laravel LAMP Stack - LocalStack EC2";
pub const WEB_SERVER: &str = "Apache Running";
pub const INSTANCE_ID: &str = "i-cd2d73cbd14fd6c58";
pub const PUBLIC_IP: &str = "54.214.223.198";
pub const CONTAINER: &str = "laravel-lamp";
pub const PORT: &str = "8081";
pub const DOCUMENT_ROOT: &str = "/var/www/html/public";
pub const EXTERNAL_ENDPOINT: &str = "https://localhost.localstack.cloud:4566";

/// Render the banner page for the given instant.
pub fn render(now: DateTime<Utc>) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>{stack}</title></head>\n\
         <body>\n\
         <h1>🚀 {stack}</h1>\n\
         <p>✅ Web Server: {web_server}</p>\n\
         <p>✅ Runtime: rustc {runtime}</p>\n\
         <p>✅ Server Time: {time}</p>\n\
         <p>✅ Instance ID: {instance}</p>\n\
         <p>✅ Public IP: {ip}</p>\n\
         <p>🎉 Laravel LAMP Stack Deployment Successful!</p>\n\
         <hr>\n\
         <h2>📋 System Information</h2>\n\
         <p>• Container: {container}</p>\n\
         <p>• Port: {port}</p>\n\
         <p>• Document Root: {docroot}</p>\n\
         <p>• LocalStack Endpoint: {endpoint}</p>\n\
         </body>\n\
         </html>\n",
        stack = STACK_NAME,
        web_server = WEB_SERVER,
        runtime = runtime_version(),
        time = server_time(now),
        instance = INSTANCE_ID,
        ip = PUBLIC_IP,
        container = CONTAINER,
        port = PORT,
        docroot = DOCUMENT_ROOT,
        endpoint = EXTERNAL_ENDPOINT,
    )
}
