pub mod u001_publish_config;
