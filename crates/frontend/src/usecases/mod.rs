pub mod u101_upload_sap_data;
